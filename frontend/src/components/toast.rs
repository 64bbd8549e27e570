use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;

use crate::config::{TOAST_DURATION_MS, TOAST_LIMIT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Default => "default",
            ToastVariant::Destructive => "destructive",
        }
    }
}

/// A transient, non-blocking message shown in the corner of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Anything that can surface a toast to the user. Handlers take this instead
/// of reaching for a global so tests can swap in a recorder.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueuedToast {
    pub id: usize,
    pub toast: Toast,
}

#[derive(Debug)]
pub enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

/// Visible toasts, newest first, capped at `TOAST_LIMIT`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: usize,
    entries: Vec<QueuedToast>,
}

impl ToastQueue {
    pub fn entries(&self) -> &[QueuedToast] {
        &self.entries
    }

    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push(toast) => {
                let id = self.next_id;
                self.next_id += 1;
                self.entries.insert(0, QueuedToast { id, toast });
                self.entries.truncate(TOAST_LIMIT);
            }
            ToastAction::Dismiss(id) => {
                self.entries.retain(|entry| entry.id != id);
            }
        }
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    dispatch: Callback<ToastAction>,
}

/// `Notifier` backed by the `ToastProvider` queue.
#[derive(Clone, PartialEq)]
pub struct ToastNotifier {
    dispatch: Callback<ToastAction>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        self.dispatch.emit(ToastAction::Push(toast));
    }
}

#[hook]
pub fn use_toast() -> ToastNotifier {
    match use_context::<ToastContext>() {
        Some(ctx) => ToastNotifier { dispatch: ctx.dispatch },
        None => ToastNotifier {
            dispatch: Callback::from(|action: ToastAction| {
                warn!("No ToastProvider mounted, dropping {:?}", action);
            }),
        },
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    entry: QueuedToast,
    on_dismiss: Callback<usize>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let ToastItemProps { entry, on_dismiss } = props;

    {
        let on_dismiss = on_dismiss.clone();
        use_effect_with_deps(move |id: &usize| {
            let id = *id;
            let timeout = Timeout::new(TOAST_DURATION_MS, move || {
                on_dismiss.emit(id);
            });
            move || drop(timeout)
        }, entry.id);
    }

    let close = {
        let on_dismiss = on_dismiss.clone();
        let id = entry.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <li class={classes!("toast", entry.toast.variant.as_str())} role="status">
            <div class="toast-body">
                <div class="toast-title">{&entry.toast.title}</div>
                <div class="toast-description">{&entry.toast.description}</div>
            </div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"×"}</button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    // Built once: a fresh callback would re-render every consumer on each push.
    let context = {
        let dispatcher = queue.dispatcher();
        use_memo(
            move |_| ToastContext {
                dispatch: Callback::from(move |action: ToastAction| dispatcher.dispatch(action)),
            },
            (),
        )
    };
    let on_dismiss = {
        let dispatch = context.dispatch.clone();
        Callback::from(move |id: usize| dispatch.emit(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={(*context).clone()}>
            { for props.children.iter() }
            <ol class="toast-viewport">
                { for queue.entries().iter().map(|entry| html! {
                    <ToastItem key={entry.id} entry={entry.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </ol>
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    bottom: 0;
                    right: 0;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    width: 100%;
                    max-width: 420px;
                    padding: 16px;
                    margin: 0;
                    list-style: none;
                }
                .toast {
                    display: flex;
                    align-items: flex-start;
                    justify-content: space-between;
                    gap: 12px;
                    padding: 16px 20px;
                    border-radius: 8px;
                    border: 1px solid #e5e7eb;
                    background: #ffffff;
                    color: #1f2937;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    animation: toastIn 0.2s ease-out;
                }
                .toast.destructive {
                    background: #ef4444;
                    border-color: #ef4444;
                    color: #ffffff;
                }
                .toast-title {
                    font-weight: 600;
                    font-size: 0.875rem;
                }
                .toast-description {
                    font-size: 0.875rem;
                    opacity: 0.9;
                }
                .toast-close {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.1rem;
                    cursor: pointer;
                    opacity: 0.7;
                }
                @keyframes toastIn {
                    from { transform: translateY(100%); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_puts_newest_first_with_fresh_ids() {
        let mut queue = ToastQueue::default();
        queue.apply(ToastAction::Push(Toast::new("one", "first")));
        queue.apply(ToastAction::Push(Toast::destructive("two", "second")));

        let titles: Vec<_> = queue.entries().iter().map(|e| e.toast.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "one"]);
        assert_ne!(queue.entries()[0].id, queue.entries()[1].id);
        assert_eq!(queue.entries()[0].toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn push_drops_oldest_past_limit() {
        let mut queue = ToastQueue::default();
        for i in 0..TOAST_LIMIT + 2 {
            queue.apply(ToastAction::Push(Toast::new(format!("toast {}", i), "")));
        }

        assert_eq!(queue.entries().len(), TOAST_LIMIT);
        assert_eq!(queue.entries()[0].toast.title, format!("toast {}", TOAST_LIMIT + 1));
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut queue = ToastQueue::default();
        queue.apply(ToastAction::Push(Toast::new("keep", "")));
        queue.apply(ToastAction::Push(Toast::new("drop", "")));
        let drop_id = queue.entries()[0].id;

        queue.apply(ToastAction::Dismiss(drop_id));
        queue.apply(ToastAction::Dismiss(999));

        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].toast.title, "keep");
    }

    #[test]
    fn variant_names_match_css_classes() {
        assert_eq!(ToastVariant::Default.as_str(), "default");
        assert_eq!(ToastVariant::Destructive.as_str(), "destructive");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use gloo_timers::future::sleep;
    use wasm_bindgen_test::*;
    use web_sys::window;

    wasm_bindgen_test_configure!(run_in_browser);

    thread_local! {
        static CONSUMER_RENDERS: Cell<u32> = Cell::new(0);
        static NOTIFIER: RefCell<Option<ToastNotifier>> = RefCell::new(None);
    }

    #[function_component(CountingConsumer)]
    fn counting_consumer() -> Html {
        let notifier = use_toast();
        CONSUMER_RENDERS.with(|renders| renders.set(renders.get() + 1));
        NOTIFIER.with(|slot| *slot.borrow_mut() = Some(notifier));
        html! { <span>{"consumer"}</span> }
    }

    #[function_component(Harness)]
    fn harness() -> Html {
        html! {
            <ToastProvider>
                <CountingConsumer />
            </ToastProvider>
        }
    }

    #[wasm_bindgen_test]
    async fn pushing_a_toast_does_not_rerender_consumers() {
        let document = window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        yew::Renderer::<Harness>::with_root(root.clone()).render();
        sleep(Duration::from_millis(20)).await;
        assert_eq!(CONSUMER_RENDERS.with(Cell::get), 1);

        let notifier = NOTIFIER.with(|slot| slot.borrow().clone()).unwrap();
        notifier.notify(Toast::new("Pushed", "from the consumer"));
        notifier.notify(Toast::new("Pushed again", "still one render"));
        sleep(Duration::from_millis(20)).await;

        assert!(root.inner_html().contains("Pushed again"));
        assert_eq!(CONSUMER_RENDERS.with(Cell::get), 1);
    }
}
