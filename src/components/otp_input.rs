//! Four single-digit inputs bound to an [`OtpEntry`].

use leptos::prelude::*;

use crate::util::otp::OtpEntry;
use crate::util::validate::OTP_LEN;

#[component]
pub fn OtpInput(entry: RwSignal<OtpEntry>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let refs: Vec<NodeRef<leptos::html::Input>> = (0..OTP_LEN).map(|_| NodeRef::new()).collect();
    let focus_refs = refs.clone();

    let slots = refs
        .into_iter()
        .enumerate()
        .map(|(index, slot_ref)| {
            let focus_refs = focus_refs.clone();
            view! {
                <input
                    node_ref=slot_ref
                    class="otp-input__slot"
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    aria-label=format!("Digit {}", index + 1)
                    prop:value=move || entry.with(|e| e.slot_text(index))
                    disabled=move || disabled.get()
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        let mut next = None;
                        entry.update(|e| next = e.apply_input(index, &raw));
                        if let Some(input) = next.and_then(|i| focus_refs.get(i)).and_then(|r| r.get()) {
                            let _ = input.focus();
                        }
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div class="otp-input" class:otp-input--complete=move || entry.with(|e| e.code().is_some())>
            {slots}
        </div>
    }
}
