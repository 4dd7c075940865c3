use super::*;

fn lamp() -> Product {
    Product {
        id: "p1".to_owned(),
        name: "Lamp".to_owned(),
        description: "Desk lamp".to_owned(),
        price: 499.5,
        image: None,
    }
}

fn filled(mode: FormMode) -> ProductForm {
    ProductForm { mode, name: " Kettle ".to_owned(), description: "Steel".to_owned(), price: "899".to_owned() }
}

#[test]
fn starts_in_create_mode_with_empty_fields() {
    let form = ProductForm::default();
    assert_eq!(form.mode, FormMode::Create);
    assert!(!form.is_editing());
    assert_eq!(form.title(), "Add Product");
    assert_eq!(form.submit_label(), "Add Product");
    assert!(form.name.is_empty() && form.description.is_empty() && form.price.is_empty());
}

#[test]
fn begin_edit_seeds_draft_from_product() {
    let mut form = filled(FormMode::Create);
    form.begin_edit(&lamp());
    assert_eq!(form.mode, FormMode::Edit { id: "p1".to_owned() });
    assert_eq!(form.name, "Lamp");
    assert_eq!(form.description, "Desk lamp");
    assert_eq!(form.price, "499.5");
    assert_eq!(form.title(), "Edit Product");
    assert_eq!(form.submit_label(), "Update Product");
}

#[test]
fn cancel_returns_to_empty_create() {
    let mut form = ProductForm::default();
    form.begin_edit(&lamp());
    form.cancel();
    assert_eq!(form, ProductForm::default());
}

#[test]
fn create_submission_trims_and_parses() {
    let submission = filled(FormMode::Create).submission().unwrap();
    assert_eq!(
        submission,
        Submission::Create(ProductInput { name: "Kettle".to_owned(), description: "Steel".to_owned(), price: 899.0 })
    );
}

#[test]
fn edit_submission_carries_identity() {
    let mut form = ProductForm::default();
    form.begin_edit(&lamp());
    form.name = "Floor Lamp".to_owned();
    match form.submission().unwrap() {
        Submission::Update { id, input } => {
            assert_eq!(id, "p1");
            assert_eq!(input.name, "Floor Lamp");
            assert!((input.price - 499.5).abs() < f64::EPSILON);
        }
        Submission::Create(_) => panic!("expected update submission"),
    }
}

#[test]
fn submission_requires_every_field() {
    let mut form = filled(FormMode::Create);
    form.name = "  ".to_owned();
    assert_eq!(form.submission(), Err("Name is required."));

    let mut form = filled(FormMode::Create);
    form.description.clear();
    assert_eq!(form.submission(), Err("Description is required."));

    let mut form = filled(FormMode::Create);
    form.price.clear();
    assert_eq!(form.submission(), Err("Price is required."));
}

#[test]
fn submission_rejects_bad_prices() {
    for price in ["abc", "-1", "NaN", "inf"] {
        let form = ProductForm { price: price.to_owned(), ..filled(FormMode::Create) };
        assert_eq!(form.submission(), Err("Price must be a non-negative number."), "price {price:?}");
    }
}

#[test]
fn reset_after_success_clears_edit_mode() {
    let mut form = ProductForm::default();
    form.begin_edit(&lamp());
    form.reset();
    assert!(!form.is_editing());
    assert!(form.name.is_empty());
}
