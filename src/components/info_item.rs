use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfoItemProps {
    pub label: String,
    pub value: String,
}

#[function_component(InfoItem)]
pub fn info_item(props: &InfoItemProps) -> Html {
    html! {
        <div class="info-item">
            <span class="info-label">{ &props.label }</span>
            <span class="info-value">{ &props.value }</span>
        </div>
    }
}
