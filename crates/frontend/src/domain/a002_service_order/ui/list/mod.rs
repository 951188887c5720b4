use crate::domain::a002_service_order::ui::details::OrderDetails;
use crate::shared::api_utils::navigate_to;
use crate::shared::date_utils::format_date;
use crate::shared::embedded::read_embedded_or_default;
use crate::shared::format::format_brl;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a002_service_order::aggregate::ServiceOrder;
use contracts::domain::a002_service_order::filter::OrderFilter;
use contracts::enums::ServiceStatus;
use leptos::prelude::*;

fn status_badge_class(status: ServiceStatus) -> String {
    format!("badge badge--{}", status.code())
}

/// Paging is a server navigation that carries the active filter criteria, so
/// the server scopes the next page the same way the client scopes this one.
fn list_url(filter: &OrderFilter, page: u32) -> String {
    match serde_qs::to_string(&filter.to_query(page)) {
        Ok(qs) if !qs.is_empty() => format!("/vendas/lista?{qs}"),
        Ok(_) => "/vendas/lista".to_string(),
        Err(e) => {
            log::error!("order list query serialization failed: {e}");
            "/vendas/lista".to_string()
        }
    }
}

/// Page number of the currently rendered list, taken from the URL.
fn current_page() -> u32 {
    let Some(window) = web_sys::window() else {
        return 1;
    };
    let search = window.location().search().unwrap_or_default();
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::list_url;
    use contracts::domain::a002_service_order::filter::OrderFilter;

    #[test]
    fn test_page_links_carry_active_filters() {
        let mut f = OrderFilter::default();
        f.texto = "prata".to_string();
        f.vendedor = "bruno".to_string();
        assert_eq!(
            list_url(&f, 2),
            "/vendas/lista?q=prata&vendedor=bruno&page=2"
        );
    }

    #[test]
    fn test_blank_filter_on_first_page_keeps_the_bare_url() {
        assert_eq!(list_url(&OrderFilter::default(), 1), "/vendas/lista");
    }
}

/// Service order list with live conjunctive filters.
///
/// Orders arrive embedded in the page (one server page at a time); the
/// filters run client-side over that page, and moving between pages is a
/// server navigation that carries the active criteria.
#[component]
#[allow(non_snake_case)]
pub fn ServiceOrderList() -> impl IntoView {
    let orders = RwSignal::new(read_embedded_or_default::<Vec<ServiceOrder>>("servicos-data"));
    let filter = RwSignal::new(OrderFilter::default());
    let page = current_page();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    // Distinct sellers populate the dropdown; orders without a seller are
    // reachable only through the other criteria.
    let sellers = Memo::new(move |_| {
        let mut v: Vec<String> = orders
            .get()
            .into_iter()
            .filter_map(|o| o.vendedor)
            .collect();
        v.sort();
        v.dedup();
        v
    });

    let filtered = Memo::new(move |_| {
        let f = filter.get();
        orders
            .get()
            .into_iter()
            .filter(|o| f.matches(o))
            .collect::<Vec<ServiceOrder>>()
    });

    let open_details_modal = move |order: ServiceOrder| {
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
                    <h1 class="header__title">{"Serviços"}</h1>
                </div>
                <div class="header__actions">
                    <span class="header__count">
                        {move || format!("{} de {}", filtered.get().len(), orders.get().len())}
                    </span>
                </div>
            </div>

            <div class="filter-bar">
                <input
                    class="form__input filter-bar__search"
                    placeholder="Buscar por cliente, descrição ou #id"
                    prop:value=move || filter.get().texto
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| f.texto = v);
                    }
                />
                <select
                    class="form__input"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| f.status = ServiceStatus::from_code(&v));
                    }
                >
                    <option value="">{"Todos os status"}</option>
                    {ServiceStatus::all()
                        .into_iter()
                        .map(|s| {
                            view! { <option value=s.code()>{s.display_name()}</option> }
                        })
                        .collect_view()}
                </select>
                <select
                    class="form__input"
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| f.vendedor = v);
                    }
                >
                    <option value="">{"Todos os vendedores"}</option>
                    {move || {
                        sellers
                            .get()
                            .into_iter()
                            .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || filter.get().data
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        filter.update(|f| f.data = v);
                    }
                />
            </div>

            <Show
                when=move || !filtered.get().is_empty()
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            {move || {
                                if filter.get().is_empty() {
                                    "Nenhum serviço cadastrado."
                                } else {
                                    "Nenhum serviço corresponde aos filtros."
                                }
                            }}
                        </div>
                    }
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
                                <th class="table__header-cell">{"Restante"}</th>
                                <th class="table__header-cell">{"Vendedor"}</th>
                                <th class="table__header-cell">{"Data"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                filtered
                                    .get()
                                    .into_iter()
                                    .map(|o| {
                                        let row = o.clone();
                                        view! {
                                            <tr
                                                class="table__row"
                                                on:click=move |_| open_details_modal(row.clone())
                                            >
                                                <td class="table__cell">{format!("#{}", o.id)}</td>
                                                <td class="table__cell">{o.cliente.clone()}</td>
                                                <td class="table__cell">{o.descricao.clone()}</td>
                                                <td class="table__cell">
                                                    <span class=status_badge_class(o.status)>
                                                        {o.status.display_name()}
                                                    </span>
                                                </td>
                                                <td class="table__cell">{format_brl(o.restante)}</td>
                                                <td class="table__cell">
                                                    {o.vendedor.clone().unwrap_or_else(|| "-".to_string())}
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

            <div class="pagination">
                <Show when=move || { page > 1 }>
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            navigate_to(&list_url(&filter.get_untracked(), page - 1));
                        }
                    >
                        {"Anterior"}
                    </button>
                </Show>
                <span class="pagination__page">{format!("Página {page}")}</span>
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        navigate_to(&list_url(&filter.get_untracked(), page + 1));
                    }
                >
                    {"Próxima"}
                </button>
            </div>
        </div>
    }
}
