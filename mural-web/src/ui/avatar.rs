use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AvatarProps {
    pub src: String,
}

#[function_component(Avatar)]
pub fn avatar(p: &AvatarProps) -> Html {
    html! {
        <img class="avatar" src={ p.src.clone() } alt="" />
    }
}
