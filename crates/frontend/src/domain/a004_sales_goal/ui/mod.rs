mod sales_modal;

use crate::shared::components::ProgressBar;
use crate::shared::embedded::read_embedded_or_default;
use crate::shared::format::format_brl;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a004_sales_goal::{
    distribution_status, has_invalid_holiday, parse_holidays, sanitize_holidays,
    working_day_count, DistributionStatus, GoalsPageData, SellerGoal,
};
use leptos::prelude::*;
use sales_modal::UserSalesModal;

const WEEKDAY_LABELS: [&str; 7] = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"];

/// Sales goals page: store goal form with live working-day calculation,
/// per-seller distribution and the progress panel.
#[component]
#[allow(non_snake_case)]
pub fn GoalsPage() -> impl IntoView {
    let data = read_embedded_or_default::<GoalsPageData>("metas-data");

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {format!("Metas — {:02}/{}", data.mes, data.ano)}
                    </h1>
                </div>
            </div>

            <GoalForm data=data.clone() />
            <DistributionPanel data=data.clone() />
            <GoalsPanel data=data />
        </div>
    }
}

#[component]
fn GoalForm(data: GoalsPageData) -> impl IntoView {
    let default_mes = if data.mes >= 1 { data.mes } else { 1 };
    let default_ano = data.ano;

    let mes = RwSignal::new(default_mes.to_string());
    let ano = RwSignal::new(default_ano.to_string());
    // Mon..Sat active by default; the shop closes on Sundays.
    let weekdays = RwSignal::new([true, true, true, true, true, true, false]);
    let holidays = RwSignal::new(String::new());
    let meta_loja = RwSignal::new(if data.meta_loja > 0.0 {
        format!("{:.2}", data.meta_loja)
    } else {
        String::new()
    });

    // Recomputed on every keystroke of the form.
    let dias_uteis = Memo::new(move |_| {
        let y = ano.get().trim().parse().unwrap_or(default_ano);
        let m = mes.get().trim().parse().unwrap_or(default_mes).clamp(1, 12);
        let active: Vec<u8> = weekdays
            .get()
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i as u8)
            .collect();
        working_day_count(y, m, &active, &parse_holidays(&holidays.get()))
    });

    let invalid_holiday = Memo::new(move |_| {
        let y = ano.get().trim().parse().unwrap_or(default_ano);
        let m = mes.get().trim().parse().unwrap_or(default_mes).clamp(1, 12);
        has_invalid_holiday(y, m, &parse_holidays(&holidays.get()))
    });

    let daily_target = move || {
        let goal: f64 = meta_loja.get().replace(',', ".").trim().parse().unwrap_or(0.0);
        let days = dias_uteis.get();
        if days > 0 {
            goal / f64::from(days)
        } else {
            0.0
        }
    };

    view! {
        <div class="panel">
            <h2 class="panel__title">{"Meta da loja"}</h2>
            <form class="form" method="post" action="/metas/definir">
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">{"Mês"}</label>
                        <input
                            class="form__input"
                            name="mes"
                            type="number"
                            min="1"
                            max="12"
                            prop:value=move || mes.get()
                            on:input=move |ev| mes.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">{"Ano"}</label>
                        <input
                            class="form__input"
                            name="ano"
                            type="number"
                            prop:value=move || ano.get()
                            on:input=move |ev| ano.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">{"Meta (R$)"}</label>
                        <input
                            class="form__input"
                            name="meta_loja"
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || meta_loja.get()
                            on:input=move |ev| meta_loja.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form__group">
                    <label class="form__label">{"Dias de trabalho"}</label>
                    <div class="form__checkbox-row">
                        {WEEKDAY_LABELS
                            .into_iter()
                            .enumerate()
                            .map(|(i, label)| {
                                view! {
                                    <label class="form__checkbox">
                                        <input
                                            type="checkbox"
                                            name=format!("dia_{i}")
                                            prop:checked=move || weekdays.get()[i]
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                weekdays.update(|w| w[i] = checked);
                                            }
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="form__group">
                    <label class="form__label">{"Feriados extras (dias, separados por vírgula)"}</label>
                    <input
                        class="form__input"
                        name="feriados"
                        placeholder="7, 15, 21"
                        prop:value=move || holidays.get()
                        on:input=move |ev| {
                            holidays.set(sanitize_holidays(&event_target_value(&ev)));
                        }
                    />
                </div>

                <p class="panel__summary">
                    {move || {
                        format!(
                            "{} dias úteis — meta diária {}",
                            dias_uteis.get(),
                            format_brl(daily_target()),
                        )
                    }}
                    {move || {
                        invalid_holiday
                            .get()
                            .then(|| {
                                view! {
                                    <span class="panel__summary-warning">
                                        {" (há feriado fora do mês)"}
                                    </span>
                                }
                            })
                    }}
                </p>

                <button class="button button--primary" type="submit">{"Salvar meta"}</button>
            </form>
        </div>
    }
}

#[component]
fn DistributionPanel(data: GoalsPageData) -> impl IntoView {
    let store_goal = data.meta_loja;
    let sellers = StoredValue::new(data.metas.clone());
    let values = RwSignal::new(
        data.metas
            .iter()
            .map(|g| g.meta)
            .collect::<Vec<f64>>(),
    );

    let distributed = Memo::new(move |_| values.get().iter().sum::<f64>());

    let status = Memo::new(move |_| distribution_status(store_goal, distributed.get()));

    let status_view = move || match status.get() {
        DistributionStatus::Balanced => view! {
            <p class="panel__summary panel__summary--ok">{"Distribuição equilibrada."}</p>
        }
        .into_any(),
        DistributionStatus::Missing(v) => view! {
            <p class="panel__summary panel__summary--warn">
                {format!("Falta distribuir {}.", format_brl(v))}
            </p>
        }
        .into_any(),
        DistributionStatus::Exceeded(v) => view! {
            <p class="panel__summary panel__summary--warn">
                {format!("A distribuição excede a meta da loja em {}.", format_brl(v))}
            </p>
        }
        .into_any(),
    };

    view! {
        <div class="panel">
            <h2 class="panel__title">
                {format!("Distribuição — meta da loja {}", format_brl(store_goal))}
            </h2>
            <form class="form" method="post" action="/metas/distribuir">
                {sellers
                    .get_value()
                    .into_iter()
                    .enumerate()
                    .map(|(i, g)| {
                        view! {
                            <div class="form__group form__group--inline">
                                <label class="form__label">{g.nome.clone()}</label>
                                <input
                                    class="form__input"
                                    name=format!("meta_{}", g.user_id)
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    prop:value=move || {
                                        values
                                            .get()
                                            .get(i)
                                            .map(|v| format!("{v:.2}"))
                                            .unwrap_or_default()
                                    }
                                    on:input=move |ev| {
                                        let v: f64 = event_target_value(&ev)
                                            .replace(',', ".")
                                            .trim()
                                            .parse()
                                            .unwrap_or(0.0);
                                        values.update(|vs| {
                                            if let Some(slot) = vs.get_mut(i) {
                                                *slot = v;
                                            }
                                        });
                                    }
                                />
                            </div>
                        }
                    })
                    .collect_view()}

                <p class="panel__summary">
                    {move || format!("Distribuído: {}", format_brl(distributed.get()))}
                </p>
                {status_view}

                <button class="button button--primary" type="submit">
                    {"Salvar distribuição"}
                </button>
            </form>
        </div>
    }
}

#[component]
fn GoalsPanel(data: GoalsPageData) -> impl IntoView {
    let mes = data.mes;
    let ano = data.ano;
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_sales = move |goal: SellerGoal| {
        modal_stack.clear();
        modal_stack.push(move |handle| {
            let goal = goal.clone();
            let on_close = {
                let handle = handle.clone();
                Callback::new(move |_| handle.close())
            };
            view! {
                <UserSalesModal
                    user_id=goal.user_id
                    nome=goal.nome.clone()
                    mes=mes
                    ano=ano
                    on_close=on_close
                />
            }
            .into_any()
        });
    };

    view! {
        <div class="panel">
            <h2 class="panel__title">{"Acompanhamento"}</h2>
            <Show
                when={
                    let has = !data.metas.is_empty();
                    move || has
                }
                fallback=|| {
                    view! { <div class="empty-state">{"Nenhuma meta distribuída."}</div> }
                }
            >
                {data
                    .metas
                    .clone()
                    .into_iter()
                    .map(|g| {
                        let reached = g.reached();
                        let percent = g.percent();
                        let for_click = g.clone();
                        view! {
                            <div
                                class="goal-row"
                                on:click=move |_| open_sales(for_click.clone())
                            >
                                <span class="goal-row__name">{g.nome.clone()}</span>
                                <ProgressBar percent=percent reached=reached />
                                <span class="goal-row__numbers">
                                    {format!(
                                        "{} / {} ({:.0}%)",
                                        format_brl(g.vendido),
                                        format_brl(g.meta),
                                        percent,
                                    )}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </Show>
        </div>
    }
}
