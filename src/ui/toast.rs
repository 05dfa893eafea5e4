/// Transient notification toast
///
/// Each call to [`show`] mounts its own `Toast` into a fresh host element on
/// `<body>`. The toast slides in, dwells, slides out and then removes its
/// host. Concurrent toasts simply overlap.

use crate::config::ToastTiming;
use crate::timer::Timeout;
use crate::ui::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::AppHandle;
use yew::prelude::*;

const TOAST_STYLE: &str = "position: fixed; top: 100px; right: 20px; \
    background: #10b981; color: white; padding: 14px 24px; border-radius: 12px; \
    box-shadow: 0 6px 20px rgba(16, 185, 129, 0.4); z-index: 10000; \
    transition: transform 0.4s cubic-bezier(0.16, 1, 0.3, 1);";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

impl ToastPhase {
    pub fn transform(self) -> &'static str {
        match self {
            ToastPhase::Visible => "translateX(0)",
            ToastPhase::Entering | ToastPhase::Leaving => "translateX(120%)",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    pub timing: ToastTiming,
    pub on_done: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let phase = use_state(|| ToastPhase::Entering);

    {
        let phase = phase.clone();
        let timing = props.timing;
        let on_done = props.on_done.clone();

        use_effect_with((), move |_| {
            let timers = vec![
                {
                    let phase = phase.clone();
                    Timeout::new(timing.enter_delay_ms, move || phase.set(ToastPhase::Visible))
                },
                Timeout::new(timing.leave_at(), move || phase.set(ToastPhase::Leaving)),
                Timeout::new(timing.remove_at(), move || on_done.emit(())),
            ];
            move || drop(timers)
        });
    }

    let style = format!("{} transform: {};", TOAST_STYLE, phase.transform());

    html! {
        <div class="toast-notification" style={style}>
            {&props.message}
        </div>
    }
}

/// Show `message` as a toast.
pub fn show(message: &str, timing: ToastTiming) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let host = match document.create_element("div") {
        Ok(host) => host,
        Err(e) => {
            log::warn!("Could not create toast host: {:?}", e);
            return;
        }
    };
    if let Err(e) = body.append_child(&host) {
        log::warn!("Could not attach toast host: {:?}", e);
        return;
    }

    let handle: Rc<RefCell<Option<AppHandle<Toast>>>> = Rc::new(RefCell::new(None));

    let on_done = {
        let handle = handle.clone();
        let host = host.clone();
        // Unmount after the current timer callback has returned.
        Callback::from(move |_| {
            let handle = handle.clone();
            let host = host.clone();
            spawn_local(async move {
                if let Some(app) = handle.borrow_mut().take() {
                    app.destroy();
                }
                host.remove();
            });
        })
    };

    let props = ToastProps {
        message: message.to_string(),
        timing,
        on_done,
    };
    let app = yew::Renderer::<Toast>::with_root_and_props(host, props).render();
    *handle.borrow_mut() = Some(app);
}
