use crate::domain::a003_product_stock::ui::details::ProductDetails;
use crate::domain::a003_product_stock::ui::history::StockHistory;
use crate::domain::a003_product_stock::ui::movement::StockMovementForm;
use crate::shared::embedded::read_embedded_or_default;
use crate::shared::format::format_quantity;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a003_product_stock::product::Product;
use leptos::prelude::*;

/// Inventory list. Products are embedded in the page; the movement history is
/// the only remote fetch of this screen.
#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let products = RwSignal::new(read_embedded_or_default::<Vec<Product>>("estoque-data"));
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let open_details = move |product: Option<Product>| {
        modal_stack.clear();
        modal_stack.push(move |handle| {
            let product = product.clone();
            let on_close = {
                let handle = handle.clone();
                Callback::new(move |_| handle.close())
            };
            view! { <ProductDetails product=product on_close=on_close /> }.into_any()
        });
    };

    let open_movement = move |product: Product| {
        modal_stack.clear();
        modal_stack.push(move |handle| {
            let product = product.clone();
            let on_close = {
                let handle = handle.clone();
                Callback::new(move |_| handle.close())
            };
            view! { <StockMovementForm product=product on_close=on_close /> }.into_any()
        });
    };

    let open_history = move |product: Product| {
        modal_stack.clear();
        modal_stack.push_with_class(Some("modal--wide".to_string()), move |handle| {
            let product = product.clone();
            let on_close = {
                let handle = handle.clone();
                Callback::new(move |_| handle.close())
            };
            view! { <StockHistory product=product on_close=on_close /> }.into_any()
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Estoque"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {"Novo produto"}
                    </button>
                </div>
            </div>

            <Show
                when=move || !products.get().is_empty()
                fallback=|| view! { <div class="empty-state">{"Nenhum produto cadastrado."}</div> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Produto"}</th>
                                <th class="table__header-cell">{"Unidade"}</th>
                                <th class="table__header-cell">{"Saldo"}</th>
                                <th class="table__header-cell">{"Mínimo"}</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                products
                                    .get()
                                    .into_iter()
                                    .map(|p| {
                                        let low = p.below_minimum();
                                        let for_edit = p.clone();
                                        let for_move = p.clone();
                                        let for_hist = p.clone();
                                        view! {
                                            <tr class="table__row" class:table__row--alert=low>
                                                <td
                                                    class="table__cell table__cell--link"
                                                    on:click=move |_| {
                                                        open_details(Some(for_edit.clone()))
                                                    }
                                                >
                                                    {p.nome.clone()}
                                                </td>
                                                <td class="table__cell">{p.unidade.clone()}</td>
                                                <td class="table__cell">
                                                    {format_quantity(p.saldo)}
                                                    {low
                                                        .then(|| {
                                                            view! {
                                                                <span class="badge badge--alert">
                                                                    {"abaixo do mínimo"}
                                                                </span>
                                                            }
                                                        })}
                                                </td>
                                                <td class="table__cell">
                                                    {p.estoque_minimo
                                                        .map(format_quantity)
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td class="table__cell table__cell--actions">
                                                    <button
                                                        class="button button--secondary button--small"
                                                        on:click=move |_| open_movement(for_move.clone())
                                                    >
                                                        {"Movimentar"}
                                                    </button>
                                                    <button
                                                        class="button button--secondary button--small"
                                                        on:click=move |_| open_history(for_hist.clone())
                                                    >
                                                        {"Histórico"}
                                                    </button>
                                                </td>
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
