use career_types::Failure;
use leptos::prelude::*;

const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn push(&self, message: impl Into<String>, level: ToastLevel) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.into(),
                level,
            })
        });

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            TOAST_LIFETIME,
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Success);
    }

    pub fn failure(&self, failure: &Failure) {
        self.push(failure.user_message(), ToastLevel::Error);
    }
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Provides [`ToastContext`] and renders the toast stack. Mounted once at the
/// app root.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let ctx = ToastContext {
        toasts: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(ctx);

    view! {
        {children()}
        <div class="toast-container" role="status">
            <For each=move || ctx.toasts.get() key=|toast| toast.id let:toast>
                <div class=toast.level.class()>{toast.message.clone()}</div>
            </For>
        </div>
    }
}
