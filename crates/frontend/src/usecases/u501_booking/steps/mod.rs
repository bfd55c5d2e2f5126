pub mod location_selection;
pub mod payment;
pub mod scheduling;
pub mod service_selection;

pub use location_selection::LocationSelectionStep;
pub use payment::PaymentStep;
pub use scheduling::SchedulingStep;
pub use service_selection::ServiceSelectionStep;

use leptos::prelude::*;
use thaw::*;

/// Dismissable warning owned by one step
#[component]
pub fn StepNotice(notice: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        notice.get().map(|text| {
            view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    <div style="display: flex; align-items: center; gap: var(--spacing-sm);">
                        <span>{text}</span>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=move |_| notice.set(None)
                        >
                            "Fechar"
                        </Button>
                    </div>
                </MessageBar>
            }
        })
    }
}
