use std::rc::Rc;

use chrono::{Duration, Utc};
use mural_model::{Author, BlockKind, Post, PostId};
use yew::prelude::*;

use crate::ui;

#[function_component(App)]
pub fn app() -> Html {
    let posts = use_memo(|_| sample_feed(), ());
    html! {
        <main class="feed">
            { for posts.iter().map(|post| html! {
                <ui::Post key={ post.id.0.to_string() } post={ post.clone() } />
            }) }
        </main>
    }
}

// Stand-in feed data; a real deployment would hand posts down from
// whatever owns the feed.
fn sample_feed() -> Vec<Rc<Post>> {
    let now = Utc::now();
    vec![
        Rc::new(Post::new(
            PostId(1),
            Author {
                name: String::from("Ana Souza"),
                role: String::from("Web Developer"),
                avatar_url: String::from("https://i.pravatar.cc/150?u=ana"),
            },
            now - Duration::hours(2),
            vec![
                (BlockKind::Paragraph, String::from("Fala galeraa 👋")),
                (
                    BlockKind::Paragraph,
                    String::from(
                        "Acabei de subir mais um projeto no meu portfólio. \
                         É um site de agendamento pra clínicas, feito do zero 🚀",
                    ),
                ),
                (BlockKind::Link, String::from("ana.dev/doctorcare")),
            ],
        )),
        Rc::new(Post::new(
            PostId(2),
            Author {
                name: String::from("Rafael Lima"),
                role: String::from("Educator"),
                avatar_url: String::from("https://i.pravatar.cc/150?u=rafael"),
            },
            now - Duration::days(2),
            vec![
                (BlockKind::Paragraph, String::from("E aí pessoal 👋")),
                (
                    BlockKind::Paragraph,
                    String::from(
                        "Finalizei hoje o material da próxima turma, \
                         dessa vez com um capítulo inteiro sobre acessibilidade.",
                    ),
                ),
                (BlockKind::Link, String::from("rafael.dev/curso")),
            ],
        )),
    ]
}
