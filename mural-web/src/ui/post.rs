use std::rc::Rc;

use mural_model::{
    published_label, relative_label, BlockKind, CommentId, CommentThread, ContentBlock,
};
use yew::prelude::*;

use crate::ui;

const REQUIRED_MESSAGE: &str = "Este campo é obrigatório";

#[derive(Clone, PartialEq, Properties)]
pub struct PostProps {
    pub post: Rc<mural_model::Post>,
}

pub enum PostMsg {
    DraftChanged(String),
    CommentSubmitted,
    CommentDeleted(CommentId),
}

pub struct Post {
    thread: CommentThread,
}

impl Component for Post {
    type Message = PostMsg;
    type Properties = PostProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Post {
            thread: CommentThread::seeded(["Post legal"]),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PostMsg::DraftChanged(text) => {
                self.thread.set_draft(text);
            }
            PostMsg::CommentSubmitted => match self.thread.submit() {
                Some(id) => tracing::debug!(?id, "published new comment"),
                // the submit button is disabled on an empty draft, so
                // this only happens on a programmatic submit
                None => tracing::warn!("ignored submit with empty draft"),
            },
            PostMsg::CommentDeleted(id) => {
                self.thread.delete(id);
                tracing::debug!(?id, "deleted comment");
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let post = &ctx.props().post;
        let now = chrono::Utc::now();

        let oninput = ctx.link().callback(|e: web_sys::InputEvent| {
            let textarea: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            // a required-field message must not outlive the edit that fixes it
            textarea.set_custom_validity("");
            PostMsg::DraftChanged(textarea.value())
        });
        let oninvalid = Callback::from(|e: web_sys::Event| {
            let textarea: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            textarea.set_custom_validity(REQUIRED_MESSAGE);
        });
        let onsubmit = ctx.link().callback(|e: web_sys::SubmitEvent| {
            e.prevent_default();
            PostMsg::CommentSubmitted
        });
        let on_delete = ctx.link().callback(PostMsg::CommentDeleted);

        html! {
            <article class="post">
                <header class="post-header d-flex">
                    <div class="post-author d-flex">
                        <ui::Avatar src={ post.author.avatar_url.clone() } />
                        <div class="post-author-info">
                            <strong>{ &post.author.name }</strong>
                            <span>{ &post.author.role }</span>
                        </div>
                    </div>
                    <time
                        title={ published_label(&post.published_at) }
                        datetime={ post.published_at.to_rfc3339() }
                    >
                        { relative_label(&post.published_at, &now) }
                    </time>
                </header>

                <div class="post-content">
                    { for post.content().iter().map(content_block) }
                </div>

                <form class="comment-form" {onsubmit}>
                    <strong>{ "Deixe seu feedback" }</strong>
                    <textarea
                        name="comment"
                        placeholder="Deixe um comentário"
                        value={ self.thread.draft().to_string() }
                        required=true
                        {oninput}
                        {oninvalid}
                    />
                    <footer>
                        <button type="submit" disabled={ !self.thread.can_submit() }>
                            { "Publicar" }
                        </button>
                    </footer>
                </form>

                <div class="comment-list">
                    { for self.thread.comments().iter().map(|c| html! {
                        <ui::Comment
                            key={ c.id.0.to_string() }
                            id={ c.id }
                            text={ c.text.clone() }
                            on_delete={ on_delete.clone() }
                        />
                    }) }
                </div>
            </article>
        }
    }
}

fn content_block(block: &ContentBlock) -> Html {
    match block.kind {
        BlockKind::Paragraph => html! {
            <p key={ block.id.0.to_string() }>{ &block.text }</p>
        },
        // the text of a link block is its label, not its target
        BlockKind::Link => html! {
            <p key={ block.id.0.to_string() }><a href="#">{ &block.text }</a></p>
        },
    }
}
