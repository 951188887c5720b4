use leptos::prelude::*;

/// Application pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    NovaVenda,
    Servicos,
    Estoque,
    Metas,
    Financeiro,
    Producao,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Painel",
            Page::NovaVenda => "Nova Venda",
            Page::Servicos => "Gestão de Serviços",
            Page::Estoque => "Estoque",
            Page::Metas => "Metas",
            Page::Financeiro => "Financeiro",
            Page::Producao => "Produção",
        }
    }

    pub fn all() -> [Page; 7] {
        [
            Page::Dashboard,
            Page::NovaVenda,
            Page::Servicos,
            Page::Estoque,
            Page::Metas,
            Page::Financeiro,
            Page::Producao,
        ]
    }
}

/// Global app state shared via context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(Page::Dashboard),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.current_page.set(page);
    }
}
