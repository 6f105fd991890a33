use super::{
    contains_ignore_case, message_or, LoadStatus, Notice, Screen, ScreenAction, ScreenRequest,
};
use crate::catalog::{map_api_product, ApiCollection, ApiProduct, CatalogClient, Product, ProductPayload};
use crate::error::Result;
use crate::forms::ProductForm;

#[derive(Debug, Clone)]
pub enum ProductsAction {
    // Loading
    Load,

    // Search
    SetSearch(String),

    // Form dialog
    OpenCreate,
    OpenEdit { id: String },
    CloseForm,
    SubmitForm,

    // Delete confirmation
    RequestDelete { id: String },
    CancelDelete,
    ConfirmDelete,

    DismissNotice { index: usize },
}

impl ScreenAction for ProductsAction {
    fn description(&self) -> &'static str {
        match self {
            ProductsAction::Load => "Loading products and collections",
            ProductsAction::SetSearch(_) => "Updating product search",
            ProductsAction::OpenCreate => "Opening new product form",
            ProductsAction::OpenEdit { .. } => "Opening product edit form",
            ProductsAction::CloseForm => "Closing product form",
            ProductsAction::SubmitForm => "Submitting product form",
            ProductsAction::RequestDelete { .. } => "Asking to delete product",
            ProductsAction::CancelDelete => "Cancelling product delete",
            ProductsAction::ConfirmDelete => "Deleting product",
            ProductsAction::DismissNotice { .. } => "Dismissing notice",
        }
    }
}

#[derive(Debug, Clone)]
pub enum ProductsRequest {
    Load,
    Create(ProductPayload),
    Update { id: String, payload: ProductPayload },
    Delete { id: String },
}

#[derive(Debug)]
pub enum ProductsOutcome {
    Loaded {
        collections: Result<Vec<ApiCollection>>,
        products: Result<Vec<ApiProduct>>,
    },
    Created(Result<ApiProduct>),
    Updated(Result<ApiProduct>),
    Deleted { id: String, result: Result<()> },
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ScreenRequest for ProductsRequest {
    type Outcome = ProductsOutcome;

    async fn execute(self, client: &CatalogClient) -> ProductsOutcome {
        match self {
            ProductsRequest::Load => {
                // Collections are needed to resolve names; fetch both at once.
                let (collections, products) =
                    futures::join!(client.list_collections(), client.list_products());
                ProductsOutcome::Loaded { collections, products }
            }
            ProductsRequest::Create(payload) => {
                ProductsOutcome::Created(client.create_product(&payload).await)
            }
            ProductsRequest::Update { id, payload } => {
                ProductsOutcome::Updated(client.update_product(&id, &payload).await)
            }
            ProductsRequest::Delete { id } => {
                let result = client.remove_product(&id).await;
                ProductsOutcome::Deleted { id, result }
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductsScreen {
    pub status: LoadStatus,
    pub products: Vec<Product>,
    pub collections: Vec<ApiCollection>,
    pub search_term: String,

    pub form: ProductForm,
    pub is_form_open: bool,
    pub editing: Option<Product>,
    pub deleting: Option<Product>,

    /// A create/update/delete is on its way to the backend.
    pub busy: bool,
    pub notices: Vec<Notice>,
}

impl ProductsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Products whose name or category contains the search term.
    pub fn filtered(&self) -> Vec<&Product> {
        let term = self.search_term.as_str();
        self.products
            .iter()
            .filter(|p| {
                term.is_empty()
                    || contains_ignore_case(&p.name, term)
                    || contains_ignore_case(&p.category, term)
            })
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn close_form(&mut self) {
        self.is_form_open = false;
        self.editing = None;
        self.form.reset();
    }

    fn submit_form(&mut self) -> Option<ProductsRequest> {
        let data = match self.form.submit() {
            Ok(data) => data,
            Err(err) => {
                log::warn!("Product form rejected: {} ({})", err, err.field());
                self.notices.push(Notice::error(err.to_string()));
                return None;
            }
        };

        if self.editing.is_some() {
            let (Some(id), Some(collection_id)) = (data.id.clone(), data.collection_id) else {
                self.notices.push(Notice::error("Dados inválidos para edição."));
                return None;
            };
            self.busy = true;
            return Some(ProductsRequest::Update { payload: data.to_payload(collection_id), id });
        }

        let Some(collection_id) = data.collection_id else {
            self.notices.push(Notice::error("Selecione uma coleção"));
            return None;
        };
        self.busy = true;
        Some(ProductsRequest::Create(data.to_payload(collection_id)))
    }

    fn map_row(&self, row: ApiProduct) -> Product {
        map_api_product(row, &self.collections)
    }
}

impl Screen for ProductsScreen {
    type Action = ProductsAction;
    type Request = ProductsRequest;

    fn reduce(&mut self, action: ProductsAction) -> Option<ProductsRequest> {
        match action {
            ProductsAction::Load => {
                self.status = LoadStatus::Loading;
                Some(ProductsRequest::Load)
            }
            ProductsAction::SetSearch(term) => {
                self.search_term = term;
                None
            }
            ProductsAction::OpenCreate => {
                self.editing = None;
                self.form.reset();
                self.is_form_open = true;
                None
            }
            ProductsAction::OpenEdit { id } => {
                match self.find(&id).cloned() {
                    Some(product) => {
                        self.form = ProductForm::seeded(&product);
                        self.editing = Some(product);
                        self.is_form_open = true;
                    }
                    None => log::warn!("Edit requested for unknown product {}", id),
                }
                None
            }
            ProductsAction::CloseForm => {
                self.close_form();
                None
            }
            ProductsAction::SubmitForm => self.submit_form(),
            ProductsAction::RequestDelete { id } => {
                self.deleting = self.find(&id).cloned();
                None
            }
            ProductsAction::CancelDelete => {
                self.deleting = None;
                None
            }
            ProductsAction::ConfirmDelete => {
                let id = self.deleting.as_ref()?.id.clone();
                self.busy = true;
                Some(ProductsRequest::Delete { id })
            }
            ProductsAction::DismissNotice { index } => {
                self.dismiss_notice(index);
                None
            }
        }
    }

    fn apply(&mut self, outcome: ProductsOutcome) {
        match outcome {
            ProductsOutcome::Loaded { collections, products } => {
                match collections {
                    Ok(collections) => self.collections = collections,
                    Err(err) => {
                        log::warn!("Failed to load collections: {}", err);
                        self.collections.clear();
                        self.notices.push(Notice::warning(format!(
                            "Não foi possível carregar as coleções: {}",
                            message_or(&err, "Erro ao carregar coleções")
                        )));
                    }
                }

                match products {
                    Ok(rows) => {
                        let mapped: Vec<Product> =
                            rows.into_iter().map(|row| self.map_row(row)).collect();
                        self.products = mapped;
                        self.status = LoadStatus::Ready;
                        log::info!("Loaded {} products", self.products.len());
                    }
                    Err(err) => {
                        log::error!("Failed to load products: {}", err);
                        self.status =
                            LoadStatus::Error(message_or(&err, "Erro ao carregar produtos"));
                    }
                }
            }
            ProductsOutcome::Created(result) => {
                self.busy = false;
                match result {
                    Ok(row) => {
                        let product = self.map_row(row);
                        log::info!("Product created: {}", product.id);
                        self.products.push(product);
                        self.notices.push(Notice::success("Produto adicionado com sucesso!"));
                        self.close_form();
                    }
                    Err(err) => {
                        log::error!("Failed to create product: {}", err);
                        self.notices
                            .push(Notice::error(message_or(&err, "Erro ao adicionar produto")));
                    }
                }
            }
            ProductsOutcome::Updated(result) => {
                self.busy = false;
                match result {
                    Ok(row) => {
                        let product = self.map_row(row);
                        log::info!("Product updated: {}", product.id);
                        if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
                            *slot = product;
                        }
                        self.notices.push(Notice::success("Produto atualizado com sucesso!"));
                    }
                    Err(err) => {
                        log::error!("Failed to update product: {}", err);
                        self.notices
                            .push(Notice::error(message_or(&err, "Erro ao editar produto")));
                    }
                }
                self.close_form();
            }
            ProductsOutcome::Deleted { id, result } => {
                self.busy = false;
                match result {
                    Ok(()) => {
                        self.products.retain(|p| p.id != id);
                        log::info!("Product removed: {}", id);
                        self.notices.push(Notice::success("Produto removido com sucesso!"));
                    }
                    Err(err) => {
                        log::error!("Failed to remove product {}: {}", id, err);
                        self.notices
                            .push(Notice::error(message_or(&err, "Erro ao remover produto")));
                    }
                }
                self.deleting = None;
            }
        }
    }

    fn notices_mut(&mut self) -> &mut Vec<Notice> {
        &mut self.notices
    }
}
