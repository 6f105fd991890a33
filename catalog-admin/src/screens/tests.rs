use super::dashboard::{bar_fraction, items_label};
use super::*;
use crate::catalog::{ApiCollection, ApiProduct, ProductsByCategory, StatsSnapshot};
use crate::error::ApiError;
use serde_json::json;

fn api_product(id: i64, name: &str, category: &str, collection_id: i64) -> ApiProduct {
    ApiProduct {
        id,
        name: name.to_string(),
        price: 10.0,
        image: String::new(),
        category: category.to_string(),
        color: json!([]),
        size: Some("P, M".to_string()),
        description: String::new(),
        model: None,
        collection_id: Some(collection_id),
        disponible: None,
    }
}

fn loaded_products_screen() -> ProductsScreen {
    let mut screen = ProductsScreen::new();
    assert!(matches!(screen.reduce(ProductsAction::Load), Some(ProductsRequest::Load)));
    assert!(screen.status.is_loading());

    screen.apply(ProductsOutcome::Loaded {
        collections: Ok(vec![ApiCollection { id: 1, name: "Verão".into(), quantity: Some(2) }]),
        products: Ok(vec![
            api_product(1, "Laço Rosa", "Laços", 1),
            api_product(2, "Tiara Azul", "Tiaras", 1),
            api_product(3, "Presilha", "Acessórios", 1),
        ]),
    });
    screen
}

#[test]
fn test_products_load_maps_rows() {
    let screen = loaded_products_screen();
    assert_eq!(screen.status, LoadStatus::Ready);
    assert_eq!(screen.products.len(), 3);
    assert_eq!(screen.products[0].collection.as_deref(), Some("Verão"));
    assert_eq!(screen.products[0].sizes, vec!["P", "M"]);
}

#[test]
fn test_products_load_failure_sets_error_banner() {
    let mut screen = ProductsScreen::new();
    screen.reduce(ProductsAction::Load);
    screen.apply(ProductsOutcome::Loaded {
        collections: Ok(vec![]),
        products: Err(ApiError::new("Internal Server Error", Some(500))),
    });

    assert_eq!(screen.status.error(), Some("Internal Server Error"));
    assert!(!screen.status.is_loading());
}

#[test]
fn test_collections_failure_only_warns_on_products_screen() {
    let mut screen = ProductsScreen::new();
    screen.reduce(ProductsAction::Load);
    screen.apply(ProductsOutcome::Loaded {
        collections: Err(ApiError::new("Bad Gateway", Some(502))),
        products: Ok(vec![api_product(1, "Laço", "Laços", 9)]),
    });

    assert_eq!(screen.status, LoadStatus::Ready);
    assert!(screen.products[0].collection.is_none());
    assert_eq!(screen.notices[0].level, NoticeLevel::Warning);
}

#[test]
fn test_search_matches_name_or_category_ignoring_case() {
    let mut screen = loaded_products_screen();

    screen.reduce(ProductsAction::SetSearch("LAÇO".into()));
    let names: Vec<_> = screen.filtered().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["Laço Rosa"]);

    screen.reduce(ProductsAction::SetSearch("tiaras".into()));
    let names: Vec<_> = screen.filtered().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, vec!["Tiara Azul"]);

    screen.reduce(ProductsAction::SetSearch(String::new()));
    assert_eq!(screen.filtered().len(), 3);
}

#[test]
fn test_submit_without_name_issues_no_request() {
    let mut screen = loaded_products_screen();
    screen.reduce(ProductsAction::OpenCreate);
    screen.form.price = "10".into();
    screen.form.category = "Laços".into();
    screen.form.collection_id = Some(1);

    assert!(screen.reduce(ProductsAction::SubmitForm).is_none());
    assert!(screen.is_form_open);
    assert!(!screen.busy);
    assert_eq!(screen.notices.last().unwrap().message, "Preencha o campo obrigatório");
}

#[test]
fn test_create_requires_collection() {
    let mut screen = loaded_products_screen();
    screen.reduce(ProductsAction::OpenCreate);
    screen.form.name = "Novo".into();
    screen.form.price = "10".into();
    screen.form.category = "Laços".into();

    assert!(screen.reduce(ProductsAction::SubmitForm).is_none());
    assert_eq!(screen.notices.last().unwrap().message, "Selecione uma coleção");
}

#[test]
fn test_created_product_is_appended_and_form_closes() {
    let mut screen = loaded_products_screen();
    screen.reduce(ProductsAction::OpenCreate);
    screen.form.name = "Novo".into();
    screen.form.price = "10".into();
    screen.form.category = "Laços".into();
    screen.form.collection_id = Some(1);

    let request = screen.reduce(ProductsAction::SubmitForm);
    assert!(matches!(request, Some(ProductsRequest::Create(_))));
    assert!(screen.busy);

    screen.apply(ProductsOutcome::Created(Ok(api_product(9, "Novo", "Laços", 1))));
    assert!(!screen.busy);
    assert!(!screen.is_form_open);
    assert_eq!(screen.products.last().unwrap().id, "9");
    assert_eq!(screen.notices.last().unwrap().level, NoticeLevel::Success);
}

#[test]
fn test_failed_create_keeps_form_open() {
    let mut screen = loaded_products_screen();
    screen.reduce(ProductsAction::OpenCreate);
    screen.apply(ProductsOutcome::Created(Err(ApiError::new("Nome duplicado", Some(409)))));

    assert!(screen.is_form_open);
    assert_eq!(screen.products.len(), 3);
    assert_eq!(screen.notices.last().unwrap().message, "Nome duplicado");
}

#[test]
fn test_edit_replaces_by_id_and_always_closes() {
    let mut screen = loaded_products_screen();
    screen.reduce(ProductsAction::OpenEdit { id: "2".into() });
    assert!(screen.is_form_open);
    assert_eq!(screen.form.name, "Tiara Azul");

    screen.form.name = "Tiara Azul Marinho".into();
    let request = screen.reduce(ProductsAction::SubmitForm);
    let Some(ProductsRequest::Update { id, payload }) = request else {
        panic!("expected update request");
    };
    assert_eq!(id, "2");
    assert_eq!(payload.name, "Tiara Azul Marinho");

    screen.apply(ProductsOutcome::Updated(Err(ApiError::new("boom", Some(500)))));
    assert!(!screen.is_form_open);
    assert!(screen.editing.is_none());
    assert_eq!(screen.products[1].name, "Tiara Azul");

    screen.reduce(ProductsAction::OpenEdit { id: "2".into() });
    screen.apply(ProductsOutcome::Updated(Ok(api_product(2, "Tiara Azul Marinho", "Tiaras", 1))));
    assert_eq!(screen.products[1].name, "Tiara Azul Marinho");
    assert_eq!(screen.products.len(), 3);
}

#[test]
fn test_delete_removes_entity_and_closes_confirmation() {
    let mut screen = loaded_products_screen();
    screen.reduce(ProductsAction::RequestDelete { id: "1".into() });
    assert_eq!(screen.deleting.as_ref().map(|p| p.id.as_str()), Some("1"));

    let request = screen.reduce(ProductsAction::ConfirmDelete);
    assert!(matches!(request, Some(ProductsRequest::Delete { ref id }) if id == "1"));

    screen.apply(ProductsOutcome::Deleted { id: "1".into(), result: Ok(()) });
    assert!(screen.deleting.is_none());
    assert!(screen.find("1").is_none());
    assert_eq!(screen.products.len(), 2);
}

#[test]
fn test_failed_delete_still_closes_confirmation() {
    let mut screen = loaded_products_screen();
    screen.reduce(ProductsAction::RequestDelete { id: "1".into() });
    screen.reduce(ProductsAction::ConfirmDelete);
    screen.apply(ProductsOutcome::Deleted {
        id: "1".into(),
        result: Err(ApiError::new("Not Found", Some(404))),
    });

    assert!(screen.deleting.is_none());
    assert_eq!(screen.products.len(), 3);
}

#[test]
fn test_confirm_without_target_is_noop() {
    let mut screen = loaded_products_screen();
    assert!(screen.reduce(ProductsAction::ConfirmDelete).is_none());
    assert!(!screen.busy);
}

#[test]
fn test_collections_search_is_name_only() {
    let mut screen = CollectionsScreen::new();
    screen.reduce(CollectionsAction::Load);
    screen.apply(CollectionsOutcome::Loaded(Ok(vec![
        ApiCollection { id: 1, name: "Verão 2025".into(), quantity: Some(4) },
        ApiCollection { id: 2, name: "Inverno".into(), quantity: None },
    ])));

    screen.reduce(CollectionsAction::SetSearch("VERÃO".into()));
    assert_eq!(screen.filtered().len(), 1);
    assert_eq!(screen.filtered()[0].quantity, 4);
}

#[test]
fn test_collection_submit_requires_name() {
    let mut screen = CollectionsScreen::new();
    screen.reduce(CollectionsAction::OpenCreate);
    screen.form.quantity = "3".into();
    assert!(screen.reduce(CollectionsAction::SubmitForm).is_none());

    screen.form.name = "Natal".into();
    let request = screen.reduce(CollectionsAction::SubmitForm);
    let Some(CollectionsRequest::Create(payload)) = request else {
        panic!("expected create request");
    };
    assert_eq!(payload.name, "Natal");
    assert_eq!(payload.quantity, 3);
}

fn loaded_collections_screen() -> CollectionsScreen {
    let mut screen = CollectionsScreen::new();
    screen.reduce(CollectionsAction::Load);
    screen.apply(CollectionsOutcome::Loaded(Ok(vec![
        ApiCollection { id: 1, name: "Verão 2025".into(), quantity: Some(4) },
        ApiCollection { id: 2, name: "Inverno".into(), quantity: None },
    ])));
    screen
}

#[test]
fn test_search_keeps_surrounding_whitespace() {
    let mut screen = loaded_collections_screen();
    screen.reduce(CollectionsAction::SetSearch(" ".into()));
    let names: Vec<_> = screen.filtered().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, vec!["Verão 2025"]);

    let mut products = loaded_products_screen();
    products.reduce(ProductsAction::SetSearch(" ".into()));
    assert_eq!(products.filtered().len(), 2);
}

#[test]
fn test_created_collection_is_appended_and_form_closes() {
    let mut screen = loaded_collections_screen();
    screen.reduce(CollectionsAction::OpenCreate);
    screen.form.name = "Natal".into();
    screen.form.quantity = "3".into();
    assert!(matches!(
        screen.reduce(CollectionsAction::SubmitForm),
        Some(CollectionsRequest::Create(_))
    ));
    assert!(screen.busy);

    screen.apply(CollectionsOutcome::Created(Ok(ApiCollection {
        id: 5,
        name: "Natal".into(),
        quantity: Some(3),
    })));
    assert!(!screen.busy);
    assert!(!screen.is_form_open);
    assert_eq!(screen.collections.len(), 3);
    assert_eq!(screen.find("5").map(|c| c.quantity), Some(3));
    assert_eq!(screen.notices.last().unwrap().level, NoticeLevel::Success);
}

#[test]
fn test_failed_collection_create_keeps_form_open() {
    let mut screen = loaded_collections_screen();
    screen.reduce(CollectionsAction::OpenCreate);
    screen.form.name = "Natal".into();
    screen.form.quantity = "3".into();
    screen.reduce(CollectionsAction::SubmitForm);
    screen.apply(CollectionsOutcome::Created(Err(ApiError::new("Nome duplicado", Some(409)))));

    assert!(screen.is_form_open);
    assert!(!screen.busy);
    assert_eq!(screen.form.name, "Natal");
    assert_eq!(screen.collections.len(), 2);
    assert_eq!(screen.notices.last().unwrap().message, "Nome duplicado");
}

#[test]
fn test_collection_delete_removes_row_and_closes_confirmation() {
    let mut screen = loaded_collections_screen();
    screen.reduce(CollectionsAction::RequestDelete { id: "2".into() });
    assert_eq!(screen.deleting.as_ref().map(|c| c.name.as_str()), Some("Inverno"));

    let request = screen.reduce(CollectionsAction::ConfirmDelete);
    assert!(matches!(request, Some(CollectionsRequest::Delete { ref id }) if id == "2"));

    screen.apply(CollectionsOutcome::Deleted { id: "2".into(), result: Ok(()) });
    assert!(screen.deleting.is_none());
    assert!(!screen.busy);
    assert!(screen.find("2").is_none());
    assert_eq!(screen.collections.len(), 1);
}

#[test]
fn test_dashboard_cards_and_bars() {
    let mut screen = DashboardScreen::new();
    assert!(screen.cards().iter().all(|c| c.value.is_none()));

    screen.reduce(DashboardAction::Load);
    screen.apply(DashboardOutcome::Loaded(Ok(StatsSnapshot {
        products_count: 8,
        collections_count: 2,
        categories_count: 2,
        products_by_category: vec![
            ProductsByCategory { category: "Laços".into(), product_quantity: 6 },
            ProductsByCategory { category: "Tiaras".into(), product_quantity: 1 },
        ],
    })));

    assert_eq!(screen.cards()[0].value, Some(8));
    let bars = screen.category_bars();
    assert_eq!(bars[0].fraction, 0.75);
    assert_eq!(bars[0].label, "6 itens");
    assert_eq!(bars[1].label, "1 item");
}

#[test]
fn test_bar_fraction_handles_empty_catalog() {
    assert_eq!(bar_fraction(3, 0), 0.0);
    assert_eq!(bar_fraction(1, 4), 0.25);
    assert_eq!(items_label(0), "0 itens");
}

#[test]
fn test_dismiss_notice() {
    let mut screen = DashboardScreen::new();
    screen.notices.push(Notice::success("a"));
    screen.notices.push(Notice::error("b"));
    screen.reduce(DashboardAction::DismissNotice { index: 0 });
    assert_eq!(screen.notices, vec![Notice::error("b")]);

    screen.reduce(DashboardAction::DismissNotice { index: 7 });
    assert_eq!(screen.take_notices().len(), 1);
    assert!(screen.notices.is_empty());
}
