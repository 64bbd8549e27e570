use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Clone, PartialEq)]
pub struct AccordionEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Single, collapsible: opening one item closes the others, clicking the
/// open item closes it.
pub fn toggle_single(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub entries: Vec<AccordionEntry>,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="accordion">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let is_open = *open == Some(index);
                let toggle = {
                    let open = open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(toggle_single(*open, index));
                    })
                };
                html! {
                    <div class={classes!("accordion-item", is_open.then(|| "open"))}>
                        <button class="accordion-trigger" aria-expanded={is_open.to_string()} onclick={toggle}>
                            <span>{entry.question}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        if is_open {
                            <div class="accordion-content">{entry.answer}</div>
                        }
                    </div>
                }
            }) }
            <style>
                {r#"
                .accordion {
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .accordion-item {
                    border-bottom: 1px solid #e5e7eb;
                }
                .accordion-trigger {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 16px 0;
                    background: none;
                    border: none;
                    font-size: 1rem;
                    font-weight: 500;
                    text-align: left;
                    color: #f97316;
                    cursor: pointer;
                }
                .accordion-trigger:hover {
                    color: #ea580c;
                }
                .accordion-content {
                    padding-bottom: 16px;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_single;

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        assert_eq!(toggle_single(None, 1), Some(1));
        assert_eq!(toggle_single(Some(1), 2), Some(2));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(toggle_single(Some(0), 0), None);
    }
}
