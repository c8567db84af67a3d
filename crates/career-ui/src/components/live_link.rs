use leptos::html::Input;
use leptos::prelude::*;

/// Dialog showing the shareable address of a published careers page.
#[component]
pub fn LiveLinkPopUp(url: String, on_close: Callback<()>) -> impl IntoView {
    let href = url.clone();
    let field = NodeRef::<Input>::new();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>"Your careers page is live"</h2>
                <p>"Share this link with candidates:"</p>
                <input
                    class="live-link"
                    type="text"
                    readonly
                    prop:value=url
                    node_ref=field
                    on:focus=move |_| {
                        if let Some(input) = field.get() {
                            input.select();
                        }
                    }
                />
                <div class="modal-actions">
                    <a class="btn btn-primary" href=href target="_blank" rel="noopener">
                        "Open page"
                    </a>
                    <button class="btn btn-ghost" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
