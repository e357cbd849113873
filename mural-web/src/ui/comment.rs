use mural_model::CommentId;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentProps {
    pub id: CommentId,
    pub text: String,
    pub on_delete: Callback<CommentId>,
}

#[function_component(Comment)]
pub fn comment(p: &CommentProps) -> Html {
    let on_delete = {
        let id = p.id;
        p.on_delete.reform(move |_| id)
    };
    html! {
        <div class="comment d-flex align-items-start">
            <div class="comment-box flex-fill">
                <p>{ &p.text }</p>
            </div>
            <button
                type="button"
                class="btn bi-btn bi-trash"
                aria-label="Apagar comentário"
                title="Apagar comentário"
                onclick={ on_delete }
            >
            </button>
        </div>
    }
}
