use contracts::domain::a003_product_stock::product::Product;
use leptos::prelude::*;

/// Optional prices and minimums prefill as empty, never as "0".
fn optional_number(v: Option<f64>) -> String {
    match v {
        Some(x) if x > 0.0 => format!("{x}"),
        _ => String::new(),
    }
}

/// Both variants post under the `/estoque/produto/` prefix; the edit path
/// carries the product id.
fn form_action(product_id: Option<i64>) -> String {
    match product_id {
        Some(id) => format!("/estoque/produto/editar/{id}"),
        None => "/estoque/produto/novo".to_string(),
    }
}

/// Product create/edit form. `product = None` opens the blank create variant;
/// otherwise the fields prefill for editing.
#[component]
#[allow(non_snake_case)]
pub fn ProductDetails(product: Option<Product>, on_close: Callback<()>) -> impl IntoView {
    let is_new = product.is_none();
    let p = product.unwrap_or_default();
    let action = form_action((!is_new).then_some(p.id));

    let nome = RwSignal::new(p.nome.clone());
    let unidade = RwSignal::new(p.unidade.clone());
    let estoque_minimo = RwSignal::new(optional_number(p.estoque_minimo));
    let preco_m2 = RwSignal::new(optional_number(p.preco_m2));
    let preco_m3 = RwSignal::new(optional_number(p.preco_m3));

    view! {
        <div class="details">
            <div class="details__header">
                <h2 class="details__title">
                    {if is_new { "Novo produto".to_string() } else { format!("Editar — {}", p.nome) }}
                </h2>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>
                    {"Fechar"}
                </button>
            </div>

            <form class="form" method="post" action=action>
                <div class="form__group">
                    <label class="form__label">{"Nome *"}</label>
                    <input
                        class="form__input"
                        name="nome"
                        required
                        prop:value=move || nome.get()
                        on:input=move |ev| nome.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"Unidade *"}</label>
                    <input
                        class="form__input"
                        name="unidade"
                        placeholder="CX, KG, L..."
                        required
                        prop:value=move || unidade.get()
                        on:input=move |ev| unidade.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">{"Estoque mínimo"}</label>
                    <input
                        class="form__input"
                        name="estoque_minimo"
                        type="number"
                        step="0.001"
                        min="0"
                        prop:value=move || estoque_minimo.get()
                        on:input=move |ev| estoque_minimo.set(event_target_value(&ev))
                    />
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">{"Preço m²"}</label>
                        <input
                            class="form__input"
                            name="preco_m2"
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || preco_m2.get()
                            on:input=move |ev| preco_m2.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">{"Preço m³"}</label>
                        <input
                            class="form__input"
                            name="preco_m3"
                            type="number"
                            step="0.01"
                            min="0"
                            prop:value=move || preco_m3.get()
                            on:input=move |ev| preco_m3.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form__actions">
                    <button class="button button--primary" type="submit">{"Salvar"}</button>
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

#[cfg(test)]
mod tests {
    use super::{form_action, optional_number};

    #[test]
    fn test_zero_and_missing_prefill_empty() {
        assert_eq!(optional_number(None), "");
        assert_eq!(optional_number(Some(0.0)), "");
        assert_eq!(optional_number(Some(12.5)), "12.5");
    }

    #[test]
    fn test_form_posts_under_the_product_prefix() {
        assert_eq!(form_action(Some(42)), "/estoque/produto/editar/42");
        assert_eq!(form_action(None), "/estoque/produto/novo");
    }
}
