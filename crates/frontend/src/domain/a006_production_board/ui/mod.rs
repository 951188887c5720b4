use crate::shared::date_utils::format_date;
use crate::shared::embedded::read_embedded_or_default;
use crate::shared::modal_stack::ModalStackService;
use crate::domain::a002_service_order::ui::details::OrderDetails;
use contracts::domain::a002_service_order::aggregate::ServiceOrder;
use contracts::enums::ServiceStatus;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const FILTER_STORAGE_KEY: &str = "filtroProducao";
const REFRESH_SECONDS: u32 = 60;

/// Statuses that appear on the shop-floor board. Delivered and cancelled
/// orders are not production work.
const BOARD_STATUSES: [ServiceStatus; 3] = [
    ServiceStatus::Pendente,
    ServiceStatus::Producao,
    ServiceStatus::Pronto,
];

fn load_saved_filter() -> Option<ServiceStatus> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let code = storage.get_item(FILTER_STORAGE_KEY).ok()??;
    ServiceStatus::from_code(&code)
}

fn save_filter(filter: Option<ServiceStatus>) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    match filter {
        Some(s) => {
            let _ = storage.set_item(FILTER_STORAGE_KEY, s.code());
        }
        None => {
            let _ = storage.remove_item(FILTER_STORAGE_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A scheduled tick can land after the board was torn down. The fallible
    // reads must then signal disposal so the loop exits quietly.
    #[test]
    fn test_tick_reads_signal_disposal_after_teardown() {
        let owner = Owner::new();
        owner.set();
        let generation = StoredValue::new(0_u64);
        let countdown = RwSignal::new(REFRESH_SECONDS);
        assert_eq!(generation.try_get_value(), Some(0));
        assert_eq!(countdown.try_get_untracked(), Some(REFRESH_SECONDS));
        drop(owner);
        assert_eq!(generation.try_get_value(), None);
        assert_eq!(countdown.try_get_untracked(), None);
        // A write after teardown hands the value back instead of applying it.
        assert_eq!(countdown.try_set(10), Some(10));
    }
}

/// Shop-floor board. Read-mostly screen left open on a wall monitor, so it
/// reloads itself every minute; the status filter survives the reload via
/// localStorage.
#[component]
#[allow(non_snake_case)]
pub fn ProductionBoard() -> impl IntoView {
    let orders = RwSignal::new(read_embedded_or_default::<Vec<ServiceOrder>>("producao-data"));
    let active_filter = RwSignal::new(load_saved_filter());
    let countdown = RwSignal::new(REFRESH_SECONDS);
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    // Single scheduled refresh task; bumping the generation on teardown makes
    // the pending tick a no-op instead of reloading a page we already left.
    let generation = StoredValue::new(0_u64);
    let my_generation = generation.get_value();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(1_000).await;
            // The component owner may already be disposed when this tick
            // fires; a disposed read ends the loop instead of panicking.
            match generation.try_get_value() {
                Some(g) if g == my_generation => {}
                _ => return,
            }
            let Some(left) = countdown.try_get_untracked() else {
                return;
            };
            if left <= 1 {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
                return;
            }
            let _ = countdown.try_set(left - 1);
        }
    });
    on_cleanup(move || {
        let _ = generation.try_update_value(|g| *g += 1);
    });

    let toggle_filter = move |status: ServiceStatus| {
        let next = if active_filter.get_untracked() == Some(status) {
            None
        } else {
            Some(status)
        };
        active_filter.set(next);
        save_filter(next);
    };

    let visible = Memo::new(move |_| {
        let filter = active_filter.get();
        orders
            .get()
            .into_iter()
            .filter(|o| match filter {
                Some(s) => o.status == s,
                None => BOARD_STATUSES.contains(&o.status),
            })
            .collect::<Vec<ServiceOrder>>()
    });

    let open_details = move |order: ServiceOrder| {
        modal_stack.clear();
        modal_stack.push_with_class(Some("modal--wide".to_string()), move |handle| {
            let order = order.clone();
            let on_close = {
                let handle = handle.clone();
                Callback::new(move |_| handle.close())
            };
            view! { <OrderDetails order=order on_close=on_close /> }.into_any()
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Produção"}</h1>
                </div>
                <div class="header__actions">
                    <span class="header__count">
                        {move || format!("Atualiza em {}s", countdown.get())}
                    </span>
                </div>
            </div>

            <div class="board__cards">
                {BOARD_STATUSES
                    .into_iter()
                    .map(|status| {
                        let count = move || {
                            orders.get().iter().filter(|o| o.status == status).count()
                        };
                        view! {
                            <div
                                class=format!("board__card board__card--{}", status.code())
                                class:board__card--active=move || {
                                    active_filter.get() == Some(status)
                                }
                                on:click=move |_| toggle_filter(status)
                            >
                                <span class="board__card-count">{count}</span>
                                <span class="board__card-title">{status.display_name()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !visible.get().is_empty()
                fallback=|| {
                    view! { <div class="empty-state">{"Nenhum serviço nesta fila."}</div> }
                }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"#"}</th>
                                <th class="table__header-cell">{"Cliente"}</th>
                                <th class="table__header-cell">{"Descrição"}</th>
                                <th class="table__header-cell">{"Status"}</th>
                                <th class="table__header-cell">{"Entrada"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|o| {
                                        let row = o.clone();
                                        view! {
                                            <tr
                                                class="table__row"
                                                on:click=move |_| open_details(row.clone())
                                            >
                                                <td class="table__cell">{format!("#{}", o.id)}</td>
                                                <td class="table__cell">{o.cliente.clone()}</td>
                                                <td class="table__cell">{o.descricao.clone()}</td>
                                                <td class="table__cell">
                                                    <span class=format!(
                                                        "badge badge--{}",
                                                        o.status.code(),
                                                    )>{o.status.display_name()}</span>
                                                </td>
                                                <td class="table__cell">{format_date(&o.data)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
