use crate::shared::api_utils::navigate_to;
use crate::shared::date_utils::format_datetime;
use crate::shared::format::format_brl;
use contracts::domain::a002_service_order::aggregate::ServiceOrder;
use leptos::prelude::*;

fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Service order details rendered inside the modal stack.
///
/// Everything that changes server state (status, payment, cancellation) is a
/// server navigation; the page the server renders next carries the new data.
#[component]
#[allow(non_snake_case)]
pub fn OrderDetails(order: ServiceOrder, on_close: Callback<()>) -> impl IntoView {
    let order = StoredValue::new(order);
    let show_cancel_form = RwSignal::new(false);
    let cancel_reason = RwSignal::new(String::new());

    // Payment sub-form state: "total" locks the value to the open balance.
    let payment_kind = RwSignal::new("total".to_string());
    let payment_value = RwSignal::new(format!("{:.2}", order.get_value().restante));
    let payment_date = RwSignal::new(today_iso());

    let header = move || {
        let o = order.get_value();
        view! {
            <div class="details__header">
                <h2 class="details__title">{format!("Serviço #{} — {}", o.id, o.cliente)}</h2>
                <span class=format!("badge badge--{}", o.status.code())>
                    {o.status.display_name()}
                </span>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>
                    {"Fechar"}
                </button>
            </div>
        }
    };

    let contact = move || {
        let o = order.get_value();
        let wa = o.whatsapp_link();
        view! {
            <div class="details__section">
                <h3 class="details__heading">{"Contato"}</h3>
                <p>{o.contato.clone()}</p>
                {wa.map(|link| {
                    view! {
                        <a class="button button--whatsapp" href=link target="_blank">
                            {"Chamar no WhatsApp"}
                        </a>
                    }
                })}
            </div>
        }
    };

    let timeline = move || {
        let events = order.get_value().timeline();
        view! {
            <div class="details__section">
                <h3 class="details__heading">{"Histórico"}</h3>
                <ul class="timeline">
                    {events
                        .into_iter()
                        .map(|e| {
                            let is_cancel = e.motivo.is_some();
                            view! {
                                <li class="timeline__event" class:timeline__event--danger=is_cancel>
                                    <span class="timeline__title">{e.titulo}</span>
                                    <span class="timeline__date">{format_datetime(&e.data)}</span>
                                    <span class="timeline__user">{e.usuario.clone()}</span>
                                    {e.motivo.map(|m| {
                                        view! { <span class="timeline__reason">{m}</span> }
                                    })}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
    };

    let line_items = move || {
        order.get_value().itens.map(|itens| {
            view! {
                <div class="details__section">
                    <h3 class="details__heading">{"Itens"}</h3>
                    <table class="table__data">
                        <tbody>
                            {itens
                                .into_iter()
                                .map(|item| {
                                    // Each item advances through the same linear flow on its own.
                                    let item_action = match (
                                        item.status.next(),
                                        item.status.action_label(),
                                    ) {
                                        (Some(next), Some(label)) => {
                                            let href = format!(
                                                "/vendas/itens/{}/status/{}",
                                                item.id,
                                                next.code(),
                                            );
                                            Some(view! {
                                                <button
                                                    class="button button--secondary button--small"
                                                    on:click=move |_| navigate_to(&href)
                                                >
                                                    {label}
                                                </button>
                                            })
                                        }
                                        _ => None,
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{item.descricao.clone()}</td>
                                            <td class="table__cell">
                                                {format!("{}x", item.quantidade)}
                                            </td>
                                            <td class="table__cell">
                                                <span class=format!(
                                                    "badge badge--{}",
                                                    item.status.code(),
                                                )>{item.status.display_name()}</span>
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                {item_action}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            }
        })
    };

    // One action per status: the single next stage of the linear flow.
    let status_action = move || {
        let o = order.get_value();
        match (o.status.next(), o.status.action_label()) {
            (Some(next), Some(label)) => {
                let href = format!("/vendas/servicos/{}/status/{}", o.id, next.code());
                Some(view! {
                    <button
                        class="button button--primary"
                        on:click=move |_| navigate_to(&href)
                    >
                        {label}
                    </button>
                })
            }
            _ => None,
        }
    };

    let payment_area = move || {
        let o = order.get_value();
        o.accepts_payment().then(|| {
            let action = format!("/vendas/servicos/{}/pagamento", o.id);
            let restante = o.restante;
            let is_total = move || payment_kind.get() == "total";
            view! {
                <div class="details__section">
                    <h3 class="details__heading">
                        {format!("Pagamento — restante {}", format_brl(restante))}
                    </h3>
                    <form class="form form--inline" method="post" action=action>
                        <select
                            class="form__input"
                            name="tipo"
                            on:change=move |ev| {
                                let v = event_target_value(&ev);
                                if v == "total" {
                                    payment_value.set(format!("{restante:.2}"));
                                }
                                payment_kind.set(v);
                            }
                        >
                            <option value="total">{"Quitação total"}</option>
                            <option value="parcial">{"Pagamento parcial"}</option>
                        </select>
                        <input
                            class="form__input"
                            type="number"
                            name="valor"
                            step="0.01"
                            min="0"
                            prop:disabled=is_total
                            prop:value=move || payment_value.get()
                            on:input=move |ev| payment_value.set(event_target_value(&ev))
                        />
                        <input
                            class="form__input"
                            type="date"
                            name="data"
                            prop:value=move || payment_date.get()
                            on:input=move |ev| payment_date.set(event_target_value(&ev))
                        />
                        <button class="button button--primary" type="submit">
                            {"Registrar pagamento"}
                        </button>
                    </form>
                </div>
            }
        })
    };

    let cancel_area = move || {
        let o = order.get_value();
        o.can_cancel().then(|| {
            let action = format!("/vendas/servicos/{}/cancelar", o.id);
            view! {
                <div class="details__section details__section--danger">
                    <Show
                        when=move || show_cancel_form.get()
                        fallback=move || {
                            view! {
                                <button
                                    class="button button--danger"
                                    on:click=move |_| show_cancel_form.set(true)
                                >
                                    {"Cancelar serviço"}
                                </button>
                            }
                        }
                    >
                        <form class="form" method="post" action=action.clone()>
                            <label class="form__label">{"Motivo do cancelamento"}</label>
                            <textarea
                                class="form__input form__input--area"
                                name="motivo"
                                required
                                prop:value=move || cancel_reason.get()
                                on:input=move |ev| cancel_reason.set(event_target_value(&ev))
                            ></textarea>
                            <div class="form__actions">
                                <button class="button button--danger" type="submit">
                                    {"Confirmar cancelamento"}
                                </button>
                                <button
                                    class="button button--secondary"
                                    type="button"
                                    on:click=move |_| show_cancel_form.set(false)
                                >
                                    {"Voltar"}
                                </button>
                            </div>
                        </form>
                    </Show>
                </div>
            }
        })
    };

    view! {
        <div class="details">
            {header}
            <div class="details__section">
                <h3 class="details__heading">{"Descrição"}</h3>
                <p>{move || order.get_value().descricao}</p>
            </div>
            {contact}
            {timeline}
            {line_items}
            <div class="details__actions">{status_action}</div>
            {payment_area}
            {cancel_area}
        </div>
    }
}
