use super::StepNotice;
use crate::usecases::u501_booking::view_model::BookingWizardVm;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LocationSelectionStep(vm: BookingWizardVm) -> impl IntoView {
    vm.load_locations();

    let selected = Memo::new(move |_| vm.wizard.with(|w| w.draft().location_id.clone()));

    view! {
        <div class="booking-step booking-step--location">
            <StepNotice notice=vm.locations_error />

            <Show
                when=move || !vm.locations_loading.get()
                fallback=|| view! {
                    <Flex gap=FlexGap::Small>
                        <Spinner />
                        <span>"Buscando unidades..."</span>
                    </Flex>
                }
            >
                <Show
                    when=move || vm.locations.with(|c| !c.locations.is_empty())
                    fallback=|| view! {
                        <p class="booking-step__empty">
                            "Nenhuma unidade realiza todos os exames selecionados."
                        </p>
                    }
                >
                    <ul class="booking-step__options">
                        <For
                            each=move || vm.locations.get().locations
                            key=|location| location.id().clone()
                            children=move |location| {
                                let id = location.id.clone();
                                let id_for_select = location.id.clone();
                                let address = match &location.city {
                                    Some(city) => format!("{}, {}", location.address, city),
                                    None => location.address.clone(),
                                };
                                view! {
                                    <li class="booking-step__option">
                                        <label>
                                            <input
                                                type="radio"
                                                name="booking-location"
                                                prop:checked=move || selected.get().as_ref() == Some(&id)
                                                on:change=move |_| vm.select_location(id_for_select.clone())
                                            />
                                            <span class="booking-step__option-name">{location.name}</span>
                                        </label>
                                        <div class="booking-step__option-hint">{address}</div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
