use crate::shared::number_format::format_money;
use crate::usecases::u501_booking::view_model::BookingWizardVm;
use contracts::usecases::u501_booking::selection::find_offered;
use contracts::usecases::u501_booking::BookingError;
use leptos::prelude::*;
use thaw::*;

/// What the visitor can do about a failed step
fn retry_hint(err: &BookingError) -> Option<&'static str> {
    match err {
        BookingError::PaymentDeclined => {
            Some("Verifique a forma de pagamento e tente novamente.")
        }
        BookingError::Timeout(_) => {
            Some("Tente novamente; o pedido não será duplicado.")
        }
        BookingError::FinalizeFailed(_) | BookingError::Collaborator(_) => {
            Some("Tente novamente em alguns instantes.")
        }
        BookingError::ServiceNotOffered(_)
        | BookingError::LocationNotEligible(_)
        | BookingError::SlotUnavailable { .. }
        | BookingError::LocationRequired => Some("Revise os dados e tente novamente."),
        BookingError::FinalizeInProgress | BookingError::WizardClosed => None,
    }
}

/// Order summary; the "next" control of this step submits the order
#[component]
pub fn PaymentStep(vm: BookingWizardVm) -> impl IntoView {
    let service_names = Memo::new(move |_| {
        let ids = vm.wizard.with(|w| w.draft().selected_service_ids.clone());
        vm.catalog.with(|catalog| {
            ids.iter()
                .map(|id| {
                    find_offered(catalog, id)
                        .map(|service| service.name.clone())
                        .unwrap_or_else(|| id.to_string())
                })
                .collect::<Vec<_>>()
        })
    });
    let location_name = Memo::new(move |_| {
        let Some(id) = vm.wizard.with(|w| w.draft().location_id.clone()) else {
            return String::new();
        };
        vm.locations.with(|candidates| {
            candidates
                .find(&id)
                .map(|location| location.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
    });
    let when = Memo::new(move |_| {
        vm.wizard.with(|w| {
            let draft = w.draft();
            match (draft.scheduled_date, draft.scheduled_time.as_deref()) {
                (Some(date), Some(time)) => format!("{} às {}", date.format("%d/%m/%Y"), time),
                (Some(date), None) => date.format("%d/%m/%Y").to_string(),
                _ => "-".to_string(),
            }
        })
    });
    let total = Memo::new(move |_| vm.wizard.with(|w| w.draft().total_amount));
    let last_error = Memo::new(move |_| {
        vm.wizard
            .with(|w| w.last_error().map(|err| (err.to_string(), retry_hint(err))))
    });
    let finalizing = vm.is_finalizing();

    view! {
        <div class="booking-step booking-step--payment">
            {move || last_error.get().map(|(text, hint)| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <div style="display: flex; align-items: center; gap: var(--spacing-sm);">
                        <span>{text}</span>
                        {hint.map(|hint| view! { <span>{hint}</span> })}
                        <Button
                            appearance=ButtonAppearance::Transparent
                            size=ButtonSize::Small
                            on_click=move |_| vm.dismiss_error()
                        >
                            "Fechar"
                        </Button>
                    </div>
                </MessageBar>
            })}

            <dl class="booking-step__review">
                <dt>"Exames"</dt>
                <dd>
                    <ul>
                        {move || service_names
                            .get()
                            .into_iter()
                            .map(|name| view! { <li>{name}</li> })
                            .collect_view()}
                    </ul>
                </dd>
                <dt>"Unidade"</dt>
                <dd>{move || location_name.get()}</dd>
                <dt>"Data"</dt>
                <dd>{move || when.get()}</dd>
                <dt>"Total"</dt>
                <dd><strong>{move || format!("R$ {}", format_money(total.get()))}</strong></dd>
            </dl>

            <Show when=move || finalizing.get()>
                <Flex gap=FlexGap::Small>
                    <Spinner />
                    <span>"Processando pagamento..."</span>
                </Flex>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_hint_follows_error() {
        assert_eq!(
            retry_hint(&BookingError::PaymentDeclined),
            Some("Verifique a forma de pagamento e tente novamente.")
        );
        assert_eq!(
            retry_hint(&BookingError::Timeout(30_000)),
            Some("Tente novamente; o pedido não será duplicado.")
        );
        assert_eq!(
            retry_hint(&BookingError::FinalizeFailed("500".into())),
            Some("Tente novamente em alguns instantes.")
        );
        assert_eq!(
            retry_hint(&BookingError::LocationRequired),
            Some("Revise os dados e tente novamente.")
        );
        assert_eq!(retry_hint(&BookingError::FinalizeInProgress), None);
    }
}
