use super::{
    contains_ignore_case, message_or, LoadStatus, Notice, Screen, ScreenAction, ScreenRequest,
};
use crate::catalog::{
    map_api_collection, ApiCollection, CatalogClient, Collection, CollectionPatch, CollectionPayload,
};
use crate::error::Result;
use crate::forms::CollectionForm;

#[derive(Debug, Clone)]
pub enum CollectionsAction {
    Load,
    SetSearch(String),
    OpenCreate,
    OpenEdit { id: String },
    CloseForm,
    SubmitForm,
    RequestDelete { id: String },
    CancelDelete,
    ConfirmDelete,
    DismissNotice { index: usize },
}

impl ScreenAction for CollectionsAction {
    fn description(&self) -> &'static str {
        match self {
            CollectionsAction::Load => "Loading collections",
            CollectionsAction::SetSearch(_) => "Updating collection search",
            CollectionsAction::OpenCreate => "Opening new collection form",
            CollectionsAction::OpenEdit { .. } => "Opening collection edit form",
            CollectionsAction::CloseForm => "Closing collection form",
            CollectionsAction::SubmitForm => "Submitting collection form",
            CollectionsAction::RequestDelete { .. } => "Asking to delete collection",
            CollectionsAction::CancelDelete => "Cancelling collection delete",
            CollectionsAction::ConfirmDelete => "Deleting collection",
            CollectionsAction::DismissNotice { .. } => "Dismissing notice",
        }
    }
}

#[derive(Debug, Clone)]
pub enum CollectionsRequest {
    Load,
    Create(CollectionPayload),
    Update { id: String, patch: CollectionPatch },
    Delete { id: String },
}

#[derive(Debug)]
pub enum CollectionsOutcome {
    Loaded(Result<Vec<ApiCollection>>),
    Created(Result<ApiCollection>),
    Updated(Result<ApiCollection>),
    Deleted { id: String, result: Result<()> },
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl ScreenRequest for CollectionsRequest {
    type Outcome = CollectionsOutcome;

    async fn execute(self, client: &CatalogClient) -> CollectionsOutcome {
        match self {
            CollectionsRequest::Load => CollectionsOutcome::Loaded(client.list_collections().await),
            CollectionsRequest::Create(payload) => {
                CollectionsOutcome::Created(client.create_collection(&payload).await)
            }
            CollectionsRequest::Update { id, patch } => {
                CollectionsOutcome::Updated(client.update_collection(&id, &patch).await)
            }
            CollectionsRequest::Delete { id } => {
                let result = client.remove_collection(&id).await;
                CollectionsOutcome::Deleted { id, result }
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectionsScreen {
    pub status: LoadStatus,
    pub collections: Vec<Collection>,
    pub search_term: String,

    pub form: CollectionForm,
    pub is_form_open: bool,
    pub editing: Option<Collection>,
    pub deleting: Option<Collection>,

    pub busy: bool,
    pub notices: Vec<Notice>,
}

impl CollectionsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filtered(&self) -> Vec<&Collection> {
        let term = self.search_term.as_str();
        self.collections
            .iter()
            .filter(|c| term.is_empty() || contains_ignore_case(&c.name, term))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    fn close_form(&mut self) {
        self.is_form_open = false;
        self.editing = None;
        self.form.reset();
    }

    fn submit_form(&mut self) -> Option<CollectionsRequest> {
        let data = match self.form.submit() {
            Ok(data) => data,
            Err(err) => {
                log::warn!("Collection form rejected: {} ({})", err, err.field());
                self.notices.push(Notice::error(err.to_string()));
                return None;
            }
        };

        if self.editing.is_some() {
            let Some(id) = data.id.clone() else {
                self.notices.push(Notice::error("Dados inválidos para edição."));
                return None;
            };
            self.busy = true;
            return Some(CollectionsRequest::Update { id, patch: data.to_patch() });
        }

        self.busy = true;
        Some(CollectionsRequest::Create(data.to_payload()))
    }
}

impl Screen for CollectionsScreen {
    type Action = CollectionsAction;
    type Request = CollectionsRequest;

    fn reduce(&mut self, action: CollectionsAction) -> Option<CollectionsRequest> {
        match action {
            CollectionsAction::Load => {
                self.status = LoadStatus::Loading;
                Some(CollectionsRequest::Load)
            }
            CollectionsAction::SetSearch(term) => {
                self.search_term = term;
                None
            }
            CollectionsAction::OpenCreate => {
                self.editing = None;
                self.form.reset();
                self.is_form_open = true;
                None
            }
            CollectionsAction::OpenEdit { id } => {
                match self.find(&id).cloned() {
                    Some(collection) => {
                        self.form = CollectionForm::seeded(&collection);
                        self.editing = Some(collection);
                        self.is_form_open = true;
                    }
                    None => log::warn!("Edit requested for unknown collection {}", id),
                }
                None
            }
            CollectionsAction::CloseForm => {
                self.close_form();
                None
            }
            CollectionsAction::SubmitForm => self.submit_form(),
            CollectionsAction::RequestDelete { id } => {
                self.deleting = self.find(&id).cloned();
                None
            }
            CollectionsAction::CancelDelete => {
                self.deleting = None;
                None
            }
            CollectionsAction::ConfirmDelete => {
                let id = self.deleting.as_ref()?.id.clone();
                self.busy = true;
                Some(CollectionsRequest::Delete { id })
            }
            CollectionsAction::DismissNotice { index } => {
                self.dismiss_notice(index);
                None
            }
        }
    }

    fn apply(&mut self, outcome: CollectionsOutcome) {
        match outcome {
            CollectionsOutcome::Loaded(Ok(rows)) => {
                self.collections = rows.into_iter().map(map_api_collection).collect();
                self.status = LoadStatus::Ready;
                log::info!("Loaded {} collections", self.collections.len());
            }
            CollectionsOutcome::Loaded(Err(err)) => {
                log::error!("Failed to load collections: {}", err);
                self.status = LoadStatus::Error(message_or(&err, "Erro ao carregar coleções"));
            }
            CollectionsOutcome::Created(result) => {
                self.busy = false;
                match result {
                    Ok(row) => {
                        let collection = map_api_collection(row);
                        log::info!("Collection created: {}", collection.id);
                        self.collections.push(collection);
                        self.notices.push(Notice::success("Coleção adicionada com sucesso!"));
                        self.close_form();
                    }
                    Err(err) => {
                        log::error!("Failed to create collection: {}", err);
                        self.notices
                            .push(Notice::error(message_or(&err, "Erro ao adicionar coleção")));
                    }
                }
            }
            CollectionsOutcome::Updated(result) => {
                self.busy = false;
                match result {
                    Ok(row) => {
                        let collection = map_api_collection(row);
                        log::info!("Collection updated: {}", collection.id);
                        if let Some(slot) =
                            self.collections.iter_mut().find(|c| c.id == collection.id)
                        {
                            *slot = collection;
                        }
                        self.notices.push(Notice::success("Coleção atualizada com sucesso!"));
                    }
                    Err(err) => {
                        log::error!("Failed to update collection: {}", err);
                        self.notices
                            .push(Notice::error(message_or(&err, "Erro ao editar coleção")));
                    }
                }
                self.close_form();
            }
            CollectionsOutcome::Deleted { id, result } => {
                self.busy = false;
                match result {
                    Ok(()) => {
                        self.collections.retain(|c| c.id != id);
                        log::info!("Collection removed: {}", id);
                        self.notices.push(Notice::success("Coleção removida com sucesso!"));
                    }
                    Err(err) => {
                        log::error!("Failed to remove collection {}: {}", id, err);
                        self.notices
                            .push(Notice::error(message_or(&err, "Erro ao remover coleção")));
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
