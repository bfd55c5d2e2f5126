use super::steps::{LocationSelectionStep, PaymentStep, SchedulingStep, ServiceSelectionStep};
use super::view_model::BookingWizardVm;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::auth::use_session;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_booking::{Booking, BookingEntry, WizardPhase, WizardStep};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

/// Where a closed wizard sends the visitor
fn exit_target(phase: WizardPhase, order_number: Option<&str>) -> Option<String> {
    match phase {
        WizardPhase::Completed => Some(match order_number {
            Some(number) => format!(
                "/booking/confirmation?order={}",
                urlencoding::encode(number)
            ),
            None => "/booking/confirmation".to_string(),
        }),
        WizardPhase::Abandoned => Some("/".to_string()),
        WizardPhase::Editing | WizardPhase::Finalizing(_) => None,
    }
}

/// `/book/:service_id`
#[component]
pub fn BookingWizardPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let entry = params.with(|p| BookingEntry::from_service_param(p.get("service_id").as_deref()));
        view! { <BookingWizardView entry=entry /> }
    }
}

/// `/book/combo/:combo_id`
#[component]
pub fn ComboBookingPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let entry = params.with(|p| BookingEntry::from_combo_param(p.get("combo_id").as_deref()));
        view! { <BookingWizardView entry=entry /> }
    }
}

#[component]
fn BookingWizardView(entry: BookingEntry) -> impl IntoView {
    log::debug!("booking wizard opened: {:?}", entry);
    let vm = BookingWizardVm::new(entry, use_session());
    vm.load_catalog();

    let navigate = use_navigate();
    Effect::new(move |_| {
        let target = vm
            .wizard
            .with(|w| exit_target(w.phase(), w.draft().order_number.as_deref()));
        if let Some(target) = target {
            navigate(&target, Default::default());
        }
    });

    let step = Memo::new(move |_| vm.wizard.with(|w| w.step()));
    let finalizing = vm.is_finalizing();
    let next_label = move || {
        if step.get() == WizardStep::LAST {
            "Confirmar e pagar"
        } else {
            "Continuar"
        }
    };

    view! {
        <PageFrame page_id="u501_booking--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Booking::display_name()}</h1>
                    <p class="page__subtitle">{Booking::description()}</p>
                </div>
            </div>

            <ol class="booking-steps">
                {WizardStep::all()
                    .into_iter()
                    .map(|s| {
                        let class = move || {
                            let current = step.get();
                            if s == current {
                                "booking-steps__item booking-steps__item--active"
                            } else if s < current {
                                "booking-steps__item booking-steps__item--done"
                            } else {
                                "booking-steps__item"
                            }
                        };
                        view! {
                            <li class=class>
                                <span class="booking-steps__number">{s.number()}</span>
                                <span class="booking-steps__title">{s.title()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            <div class="page__content">
                {move || match step.get() {
                    WizardStep::Services => view! { <ServiceSelectionStep vm=vm /> }.into_any(),
                    WizardStep::Location => view! { <LocationSelectionStep vm=vm /> }.into_any(),
                    WizardStep::Scheduling => view! { <SchedulingStep vm=vm /> }.into_any(),
                    WizardStep::Payment => view! { <PaymentStep vm=vm /> }.into_any(),
                }}
            </div>

            <div class="booking-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=vm.is_back_disabled()
                    on_click=move |_| vm.back()
                >
                    "Voltar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.is_next_disabled()
                    loading=finalizing
                    on_click=move |_| vm.next()
                >
                    {next_label}
                </Button>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u501_booking::FinalizeTicket;

    #[test]
    fn test_exit_target() {
        assert_eq!(exit_target(WizardPhase::Editing, None), None);
        assert_eq!(exit_target(WizardPhase::Finalizing(FinalizeTicket(1)), None), None);
        assert_eq!(exit_target(WizardPhase::Abandoned, None), Some("/".to_string()));
        assert_eq!(
            exit_target(WizardPhase::Completed, Some("PED 7")),
            Some("/booking/confirmation?order=PED%207".to_string())
        );
    }
}
