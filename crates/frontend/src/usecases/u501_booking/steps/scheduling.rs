use super::StepNotice;
use crate::usecases::u501_booking::view_model::BookingWizardVm;
use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

fn day_label(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[component]
pub fn SchedulingStep(vm: BookingWizardVm) -> impl IntoView {
    vm.load_slots();

    let chosen_date = Memo::new(move |_| vm.wizard.with(|w| w.draft().scheduled_date));
    let chosen_time = Memo::new(move |_| vm.wizard.with(|w| w.draft().scheduled_time.clone()));
    // Day being browsed; defaults to the scheduled one
    let browsing = RwSignal::new(chosen_date.get_untracked());

    let days = Memo::new(move |_| {
        vm.slots
            .with(|slots| slots.as_ref().map(|s| s.days()).unwrap_or_default())
    });
    let times = Memo::new(move |_| {
        let Some(day) = browsing.get() else {
            return Vec::new();
        };
        vm.slots
            .with(|slots| slots.as_ref().map(|s| s.times_on(day)).unwrap_or_default())
    });

    view! {
        <div class="booking-step booking-step--scheduling">
            <StepNotice notice=vm.slots_error />

            <Show
                when=move || !vm.slots_loading.get()
                fallback=|| view! {
                    <Flex gap=FlexGap::Small>
                        <Spinner />
                        <span>"Carregando horários..."</span>
                    </Flex>
                }
            >
                <Show
                    when=move || !days.with(|d| d.is_empty())
                    fallback=|| view! {
                        <p class="booking-step__empty">"Não há horários livres nesta unidade."</p>
                    }
                >
                    <div class="booking-step__days">
                        <For
                            each=move || days.get()
                            key=|day| *day
                            children=move |day| {
                                let appearance = Signal::derive(move || {
                                    if browsing.get() == Some(day) {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                });
                                view! {
                                    <Button
                                        appearance=appearance
                                        size=ButtonSize::Small
                                        on_click=move |_| browsing.set(Some(day))
                                    >
                                        {day_label(day)}
                                    </Button>
                                }
                            }
                        />
                    </div>

                    <div class="booking-step__times">
                        <For
                            each=move || times.get()
                            key=|time| time.clone()
                            children=move |time| {
                                let time_for_check = time.clone();
                                let time_for_click = time.clone();
                                let appearance = Signal::derive(move || {
                                    let picked = chosen_date.get() == browsing.get()
                                        && chosen_time.get().as_deref() == Some(time_for_check.as_str());
                                    if picked {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                });
                                view! {
                                    <Button
                                        appearance=appearance
                                        size=ButtonSize::Small
                                        on_click=move |_| {
                                            if let Some(day) = browsing.get_untracked() {
                                                vm.select_slot(day, time_for_click.clone());
                                            }
                                        }
                                    >
                                        {time}
                                    </Button>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <div class="booking-step__summary">
                {move || match (chosen_date.get(), chosen_time.get()) {
                    (Some(date), Some(time)) => format!("Agendado para {} às {}", day_label(date), time),
                    (Some(date), None) => format!("Agendado para {}", day_label(date)),
                    _ => "Escolha um dia e um horário".to_string(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_label() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(day_label(date), "09/03/2026");
    }
}
