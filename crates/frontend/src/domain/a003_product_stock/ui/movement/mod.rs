use crate::shared::format::format_quantity;
use contracts::domain::a003_product_stock::product::Product;
use leptos::prelude::*;

/// Manual stock movement form; the action URL carries the product id.
#[component]
#[allow(non_snake_case)]
pub fn StockMovementForm(product: Product, on_close: Callback<()>) -> impl IntoView {
    let action = format!("/estoque/movimentar/{}", product.id);
    let quantidade = RwSignal::new(String::new());
    let observacao = RwSignal::new(String::new());

    view! {
        <div class="details">
            <div class="details__header">
                <h2 class="details__title">{format!("Movimentar — {}", product.nome)}</h2>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>
                    {"Fechar"}
                </button>
            </div>
            <p class="details__hint">
                {format!("Saldo atual: {} {}", format_quantity(product.saldo), product.unidade)}
            </p>

            <form class="form" method="post" action=action>
                <div class="form__group">
                    <label class="form__label">{"Tipo"}</label>
                    <select class="form__input" name="tipo">
                        <option value="entrada">{"Entrada"}</option>
                        <option value="saida">{"Saída"}</option>
                    </select>
                </div>
                <div class="form__group">
                    <label class="form__label">{"Quantidade *"}</label>
                    <input
                        class="form__input"
                        name="quantidade"
                        type="number"
                        step="0.001"
                        min="0.001"
                        required
                        prop:value=move || quantidade.get()
                        on:input=move |ev| quantidade.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"Observação"}</label>
                    <textarea
                        class="form__input form__input--area"
                        name="observacao"
                        prop:value=move || observacao.get()
                        on:input=move |ev| observacao.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form__actions">
                    <button class="button button--primary" type="submit">{"Registrar"}</button>
                    <button
                        class="button button--secondary"
                        type="button"
                        on:click=move |_| on_close.run(())
                    >
                        {"Cancelar"}
                    </button>
                </div>
            </form>
        </div>
    }
}
