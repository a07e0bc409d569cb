use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <label class="field">
            <span class="field-label">{props.label.clone()}</span>
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                {oninput}
                required={props.required}
                disabled={props.disabled}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub value: String,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <label class="field">
            <span class="field-label">{props.label.clone()}</span>
            <select {onchange} required=true disabled={props.disabled}>
                {props.options.iter().map(|(value, label)| {
                    html! {
                        <option value={value.clone()} selected={value == &props.value}>
                            {label}
                        </option>
                    }
                }).collect::<Html>()}
            </select>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub submitting: bool,
}

/// Disabled while a submission is pending
#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class="btn btn-primary" disabled={props.submitting}>
            if props.submitting {
                {"Submitting..."}
            } else {
                {props.label.clone()}
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormErrorProps {
    pub error: Option<String>,
}

#[function_component(FormError)]
pub fn form_error(props: &FormErrorProps) -> Html {
    match &props.error {
        Some(message) => html! { <p class="form-error" role="alert">{message}</p> },
        None => Html::default(),
    }
}
