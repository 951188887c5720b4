use crate::dashboards::d400_overview::OverviewDashboard;
use crate::domain::a001_quote::ui::QuoteWizard;
use crate::domain::a002_service_order::ui::list::ServiceOrderList;
use crate::domain::a003_product_stock::ui::list::ProductList;
use crate::domain::a004_sales_goal::ui::GoalsPage;
use crate::domain::a005_expense::ui::FinancePage;
use crate::domain::a006_production_board::ui::ProductionBoard;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::shell::Shell;
use crate::layout::sidebar::Sidebar;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                match ctx.current_page.get() {
                    Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                    Page::NovaVenda => view! { <QuoteWizard /> }.into_any(),
                    Page::Servicos => view! { <ServiceOrderList /> }.into_any(),
                    Page::Estoque => view! { <ProductList /> }.into_any(),
                    Page::Metas => view! { <GoalsPage /> }.into_any(),
                    Page::Financeiro => view! { <FinancePage /> }.into_any(),
                    Page::Producao => view! { <ProductionBoard /> }.into_any(),
                }
            }
        />
    }
}
