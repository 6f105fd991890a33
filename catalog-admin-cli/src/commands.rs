use anyhow::{bail, Context};
use catalog_admin::catalog::{map_api_product, CatalogClient, ColorVariant};
use catalog_admin::forms::ProductForm;
use catalog_admin::screens::{
    CollectionsAction, CollectionsScreen, DashboardAction, DashboardScreen, LoadStatus, Notice,
    NoticeLevel, ProductsAction, ProductsScreen, Screen,
};
use catalog_admin::ScreenManager;

use crate::ProductFields;

const BAR_WIDTH: usize = 30;

pub async fn login(client: &CatalogClient, phone: &str) -> anyhow::Result<()> {
    let response = client.login(phone).await.context("login failed")?;
    println!("{}", response.access_token);
    match client.session().session_id() {
        Some(id) => println!("session_id: {}", id),
        None => println!("session_id: -"),
    }
    Ok(())
}

pub async fn stats(client: CatalogClient) -> anyhow::Result<()> {
    let mut manager = ScreenManager::new(DashboardScreen::new(), client);
    manager.perform(DashboardAction::Load).await;
    ensure_ready(&manager.state().status)?;

    let screen = manager.state();
    for card in screen.cards() {
        let value = card.value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        println!("{:<20} {}", card.title, value);
    }

    let bars = screen.category_bars();
    if !bars.is_empty() {
        println!();
        println!("Produtos por categoria");
    }
    for bar in bars {
        let filled = (bar.fraction * BAR_WIDTH as f32).round() as usize;
        println!(
            "{:<20} {}{} {}",
            bar.category,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH.saturating_sub(filled)),
            bar.label
        );
    }
    Ok(())
}

// ============================================
// Products
// ============================================

async fn loaded_products(client: CatalogClient) -> anyhow::Result<ScreenManager<ProductsScreen>> {
    let mut manager = ScreenManager::new(ProductsScreen::new(), client);
    manager.perform(ProductsAction::Load).await;
    ensure_ready(&manager.state().status)?;
    report(manager.state_mut().take_notices())?;
    Ok(manager)
}

pub async fn list_products(client: CatalogClient, search: Option<String>) -> anyhow::Result<()> {
    let mut manager = loaded_products(client).await?;
    if let Some(term) = search {
        manager.perform(ProductsAction::SetSearch(term)).await;
    }

    println!(
        "{:<6} {:<28} {:<16} {:>10} {:<16} {}",
        "ID", "NOME", "CATEGORIA", "PREÇO", "COLEÇÃO", "TAMANHOS"
    );
    for product in manager.state().filtered() {
        println!(
            "{:<6} {:<28} {:<16} {:>10.2} {:<16} {}",
            product.id,
            product.name,
            product.category,
            product.price,
            product.collection.as_deref().unwrap_or("-"),
            product.sizes.join(", ")
        );
    }
    Ok(())
}

pub async fn create_product(client: CatalogClient, fields: ProductFields) -> anyhow::Result<()> {
    let mut manager = loaded_products(client).await?;
    manager.perform(ProductsAction::OpenCreate).await;
    fields.apply_to(&mut manager.state_mut().form);
    manager.perform(ProductsAction::SubmitForm).await;
    report(manager.state_mut().take_notices())
}

pub async fn update_product(
    client: CatalogClient,
    id: String,
    fields: ProductFields,
) -> anyhow::Result<()> {
    let mut manager = loaded_products(client).await?;
    manager.perform(ProductsAction::OpenEdit { id: id.clone() }).await;
    if !manager.state().is_form_open {
        bail!("Produto {} não encontrado", id);
    }
    fields.apply_to(&mut manager.state_mut().form);
    manager.perform(ProductsAction::SubmitForm).await;
    report(manager.state_mut().take_notices())
}

pub async fn delete_product(client: CatalogClient, id: String) -> anyhow::Result<()> {
    let mut manager = loaded_products(client).await?;
    manager.perform(ProductsAction::RequestDelete { id: id.clone() }).await;
    if manager.state().deleting.is_none() {
        bail!("Produto {} não encontrado", id);
    }
    manager.perform(ProductsAction::ConfirmDelete).await;
    report(manager.state_mut().take_notices())
}

impl ProductFields {
    fn apply_to(self, form: &mut ProductForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(price) = self.price {
            form.price = price;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(collection_id) = self.collection_id {
            form.collection_id = Some(collection_id);
        }
        if let Some(image) = self.image {
            form.image = image;
        }
        if let Some(sizes) = self.sizes {
            form.sizes = sizes;
        }
        if !self.colors.is_empty() {
            form.colors = self.colors.iter().map(|raw| parse_color(raw)).collect();
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(model) = self.model {
            form.model = model;
        }
    }
}

/// `name=#hex`, or a bare hex.
fn parse_color(raw: &str) -> ColorVariant {
    match raw.split_once('=') {
        Some((name, hex)) => ColorVariant {
            name: name.trim().to_string(),
            hex: hex.trim().to_string(),
        },
        None => ColorVariant {
            name: String::new(),
            hex: raw.trim().to_string(),
        },
    }
}

// ============================================
// Collections
// ============================================

async fn loaded_collections(
    client: CatalogClient,
) -> anyhow::Result<ScreenManager<CollectionsScreen>> {
    let mut manager = ScreenManager::new(CollectionsScreen::new(), client);
    manager.perform(CollectionsAction::Load).await;
    ensure_ready(&manager.state().status)?;
    Ok(manager)
}

pub async fn list_collections(client: CatalogClient, search: Option<String>) -> anyhow::Result<()> {
    let mut manager = loaded_collections(client).await?;
    if let Some(term) = search {
        manager.perform(CollectionsAction::SetSearch(term)).await;
    }

    println!("{:<6} {:<32} {:>10}", "ID", "NOME", "QUANTIDADE");
    for collection in manager.state().filtered() {
        println!("{:<6} {:<32} {:>10}", collection.id, collection.name, collection.quantity);
    }
    Ok(())
}

pub async fn create_collection(
    client: CatalogClient,
    name: String,
    quantity: String,
) -> anyhow::Result<()> {
    let mut manager = loaded_collections(client).await?;
    manager.perform(CollectionsAction::OpenCreate).await;
    let form = &mut manager.state_mut().form;
    form.name = name;
    form.quantity = quantity;
    manager.perform(CollectionsAction::SubmitForm).await;
    report(manager.state_mut().take_notices())
}

pub async fn update_collection(
    client: CatalogClient,
    id: String,
    name: Option<String>,
    quantity: Option<String>,
) -> anyhow::Result<()> {
    let mut manager = loaded_collections(client).await?;
    manager.perform(CollectionsAction::OpenEdit { id: id.clone() }).await;
    if !manager.state().is_form_open {
        bail!("Coleção {} não encontrada", id);
    }

    let form = &mut manager.state_mut().form;
    if let Some(name) = name {
        form.name = name;
    }
    if let Some(quantity) = quantity {
        form.quantity = quantity;
    }
    manager.perform(CollectionsAction::SubmitForm).await;
    report(manager.state_mut().take_notices())
}

pub async fn delete_collection(client: CatalogClient, id: String) -> anyhow::Result<()> {
    let mut manager = loaded_collections(client).await?;
    manager.perform(CollectionsAction::RequestDelete { id: id.clone() }).await;
    if manager.state().deleting.is_none() {
        bail!("Coleção {} não encontrada", id);
    }
    manager.perform(CollectionsAction::ConfirmDelete).await;
    report(manager.state_mut().take_notices())
}

pub async fn collection_products(client: &CatalogClient, id: &str) -> anyhow::Result<()> {
    let collections = client.list_collections().await?;
    let rows = client.collection_products(id).await?;

    for product in rows.into_iter().map(|row| map_api_product(row, &collections)) {
        println!("{:<6} {:<28} {:<16} {:>10.2}", product.id, product.name, product.category, product.price);
    }
    Ok(())
}

// ============================================
// Users
// ============================================

pub async fn list_users(client: &CatalogClient) -> anyhow::Result<()> {
    println!("{:<6} {:<28} {:<16} {}", "ID", "NOME", "TELEFONE", "ADMIN");
    for user in client.list_users().await? {
        println!(
            "{:<6} {:<28} {:<16} {}",
            user.id,
            user.name.as_deref().unwrap_or("-"),
            user.phone_nmr.as_deref().unwrap_or("-"),
            if user.is_admin.unwrap_or(false) { "sim" } else { "não" }
        );
    }
    Ok(())
}

pub async fn delete_user(client: &CatalogClient, id: &str) -> anyhow::Result<()> {
    client.remove_user(id).await?;
    println!("Usuário {} removido", id);
    Ok(())
}

fn ensure_ready(status: &LoadStatus) -> anyhow::Result<()> {
    match status {
        LoadStatus::Error(message) => bail!("{}", message),
        _ => Ok(()),
    }
}

/// Prints notices; the first error-level notice becomes the command's error.
fn report(notices: Vec<Notice>) -> anyhow::Result<()> {
    let mut failure = None;
    for notice in notices {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message),
            NoticeLevel::Warning => eprintln!("aviso: {}", notice.message),
            NoticeLevel::Error => {
                tracing::error!(error = %notice.message, "operation failed");
                failure.get_or_insert(notice.message);
            }
        }
    }

    match failure {
        Some(message) => bail!("{}", message),
        None => Ok(()),
    }
}
