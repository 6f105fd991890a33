use super::{message_or, LoadStatus, Notice, Screen, ScreenAction, ScreenRequest};
use crate::catalog::{CatalogClient, StatsSnapshot};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum DashboardAction {
    Load,
    DismissNotice { index: usize },
}

impl ScreenAction for DashboardAction {
    fn description(&self) -> &'static str {
        match self {
            DashboardAction::Load => "Loading catalog statistics",
            DashboardAction::DismissNotice { .. } => "Dismissing notice",
        }
    }
}

#[derive(Debug, Clone)]
pub enum DashboardRequest {
    Load,
}

#[derive(Debug)]
pub enum DashboardOutcome {
    Loaded(Result<StatsSnapshot>),
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ScreenRequest for DashboardRequest {
    type Outcome = DashboardOutcome;

    async fn execute(self, client: &CatalogClient) -> DashboardOutcome {
        match self {
            DashboardRequest::Load => DashboardOutcome::Loaded(client.stats().await),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub category: String,
    pub quantity: u64,
    /// Bar width as a fraction of the total product count.
    pub fraction: f32,
    pub label: String,
}

/// Read-only statistics, recomputed on every load.
#[derive(Debug, Clone, Default)]
pub struct DashboardScreen {
    pub status: LoadStatus,
    pub stats: Option<StatsSnapshot>,
    pub notices: Vec<Notice>,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> Vec<StatCard> {
        let stats = self.stats.as_ref();
        vec![
            StatCard { title: "Total de Produtos", value: stats.map(|s| s.products_count) },
            StatCard { title: "Categorias", value: stats.map(|s| s.categories_count) },
            StatCard { title: "Coleções", value: stats.map(|s| s.collections_count) },
        ]
    }

    pub fn category_bars(&self) -> Vec<CategoryBar> {
        let Some(stats) = &self.stats else {
            return Vec::new();
        };

        stats
            .products_by_category
            .iter()
            .map(|entry| CategoryBar {
                category: entry.category.clone(),
                quantity: entry.product_quantity,
                fraction: bar_fraction(entry.product_quantity, stats.products_count),
                label: items_label(entry.product_quantity),
            })
            .collect()
    }
}

pub fn bar_fraction(product_quantity: u64, products_count: u64) -> f32 {
    if products_count == 0 {
        0.0
    } else {
        product_quantity as f32 / products_count as f32
    }
}

pub fn items_label(quantity: u64) -> String {
    if quantity == 1 {
        format!("{} item", quantity)
    } else {
        format!("{} itens", quantity)
    }
}

impl Screen for DashboardScreen {
    type Action = DashboardAction;
    type Request = DashboardRequest;

    fn reduce(&mut self, action: DashboardAction) -> Option<DashboardRequest> {
        match action {
            DashboardAction::Load => {
                self.status = LoadStatus::Loading;
                Some(DashboardRequest::Load)
            }
            DashboardAction::DismissNotice { index } => {
                self.dismiss_notice(index);
                None
            }
        }
    }

    fn apply(&mut self, outcome: DashboardOutcome) {
        match outcome {
            DashboardOutcome::Loaded(Ok(stats)) => {
                log::info!(
                    "Stats loaded: {} products, {} categories",
                    stats.products_count,
                    stats.products_by_category.len()
                );
                self.stats = Some(stats);
                self.status = LoadStatus::Ready;
            }
            DashboardOutcome::Loaded(Err(err)) => {
                log::error!("Failed to load stats: {}", err);
                self.status =
                    LoadStatus::Error(message_or(&err, "Erro ao carregar dados do servidor!"));
            }
        }
    }

    fn notices_mut(&mut self) -> &mut Vec<Notice> {
        &mut self.notices
    }
}
