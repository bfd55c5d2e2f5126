use super::StepNotice;
use crate::shared::number_format::{format_money, format_price};
use crate::usecases::u501_booking::view_model::BookingWizardVm;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ServiceSelectionStep(vm: BookingWizardVm) -> impl IntoView {
    let total = Memo::new(move |_| vm.wizard.with(|w| w.draft().total_amount));
    let selected_count = Memo::new(move |_| vm.wizard.with(|w| w.draft().selected_service_ids.len()));
    let offered = Memo::new(move |_| {
        vm.catalog
            .get()
            .into_iter()
            .filter(|service| service.is_active)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="booking-step booking-step--services">
            <StepNotice notice=vm.services_notice />

            <Show
                when=move || !vm.catalog_loading.get()
                fallback=|| view! {
                    <Flex gap=FlexGap::Small>
                        <Spinner />
                        <span>"Carregando exames..."</span>
                    </Flex>
                }
            >
                {move || match vm.catalog_error.get() {
                    Some(err) => view! {
                        <MessageBar intent=MessageBarIntent::Error>{err}</MessageBar>
                    }
                    .into_any(),
                    None if offered.with(|list| list.is_empty()) => view! {
                        <p class="booking-step__empty">
                            "Nenhum exame disponível para agendamento no momento."
                        </p>
                    }
                    .into_any(),
                    None => view! {
                        <ul class="booking-step__options">
                            <For
                                each=move || offered.get()
                                key=|service| service.id.clone()
                                children=move |service| {
                                    let id = service.id.clone();
                                    let id_for_toggle = service.id.clone();
                                    let checked = move || {
                                        vm.wizard.with(|w| w.draft().selected_service_ids.contains(&id))
                                    };
                                    view! {
                                        <li class="booking-step__option">
                                            <label>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=checked
                                                    on:change=move |_| vm.toggle_service(id_for_toggle.clone())
                                                />
                                                <span class="booking-step__option-name">{service.name}</span>
                                                <span class="booking-step__option-price">
                                                    {format_price(service.price)}
                                                </span>
                                            </label>
                                            {service.preparation.map(|text| view! {
                                                <div class="booking-step__option-hint">{text}</div>
                                            })}
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    }
                    .into_any(),
                }}
            </Show>

            <div class="booking-step__total">
                <span>{move || format!("{} exame(s) selecionado(s)", selected_count.get())}</span>
                <strong>{move || format!("Total: R$ {}", format_money(total.get()))}</strong>
            </div>
        </div>
    }
}
