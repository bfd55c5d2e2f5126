use contracts::enums::{status_label, PaymentStatus, Severity};
use leptos::prelude::*;
use thaw::*;

fn badge_color(severity: Severity) -> BadgeColor {
    match severity {
        Severity::Info => BadgeColor::Informative,
        Severity::Warning => BadgeColor::Warning,
        Severity::Success => BadgeColor::Success,
        Severity::Error => BadgeColor::Danger,
        Severity::Neutral => BadgeColor::Subtle,
    }
}

/// Badge for a raw order status code, legacy spellings included
#[component]
pub fn OrderStatusBadge(#[prop(into)] status: Signal<String>) -> impl IntoView {
    move || {
        let label = status_label(&status.get());
        view! {
            <Badge appearance=BadgeAppearance::Tint color=badge_color(label.severity)>
                {label.label}
            </Badge>
        }
    }
}

#[component]
pub fn PaymentStatusBadge(#[prop(into)] status: Signal<Option<String>>) -> impl IntoView {
    move || {
        status
            .get()
            .as_deref()
            .and_then(PaymentStatus::from_code)
            .map(|payment| {
                let label = payment.label();
                view! {
                    <Badge appearance=BadgeAppearance::Tint color=badge_color(label.severity)>
                        {label.label}
                    </Badge>
                }
            })
    }
}
