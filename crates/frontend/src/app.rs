use crate::domain::a001_purchase_order::ui::download::DownloadOrderCard;
use crate::domain::a001_purchase_order::ui::receive::ReceiveOrderForm;
use crate::domain::a002_yarn::ui::actions::YarnActionsPage;
use leptos::prelude::*;

/// Top-level sections of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPage {
    Orders,
    Yarn,
}

impl AppPage {
    pub const ALL: [AppPage; 2] = [AppPage::Orders, AppPage::Yarn];

    pub fn title(&self) -> &'static str {
        match self {
            AppPage::Orders => "Purchase Orders",
            AppPage::Yarn => "Yarn",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let active = RwSignal::new(AppPage::Orders);

    let nav = AppPage::ALL
        .into_iter()
        .map(|page| {
            view! {
                <button
                    type="button"
                    class=move || {
                        if active.get() == page { "app-nav__item app-nav__item--active" } else { "app-nav__item" }
                    }
                    on:click=move |_| {
                        log::debug!("Switching to {}", page.title());
                        active.set(page);
                    }
                >
                    {page.title()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="app">
            <nav class="app-nav">{nav}</nav>
            <main class="app-main">
                {move || match active.get() {
                    AppPage::Orders => view! {
                        <ReceiveOrderForm />
                        <DownloadOrderCard />
                    }
                    .into_any(),
                    AppPage::Yarn => view! { <YarnActionsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
