//! HTML page rendering with embedded Tera templates.

use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::{Category, Error, FieldErrors, PictureName, Product, ProductSubmission};

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../../../templates/base.html")),
    ("list.html", include_str!("../../../templates/list.html")),
    ("detail.html", include_str!("../../../templates/detail.html")),
    ("form.html", include_str!("../../../templates/form.html")),
];

/// Form field values as shown in the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub created_at: String,
    pub category_id: String,
}

impl From<&ProductSubmission> for FormFields {
    fn from(submission: &ProductSubmission) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            id: text(&submission.id),
            name: text(&submission.name),
            description: text(&submission.description),
            price: text(&submission.price),
            created_at: text(&submission.created_at),
            category_id: text(&submission.category_id),
        }
    }
}

impl From<&Product> for FormFields {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            created_at: product.created_at.format("%Y-%m-%d").to_string(),
            category_id: product.category.id.to_string(),
        }
    }
}

/// Everything the product form needs.
#[derive(Debug)]
pub struct FormPage<'a> {
    pub title: &'a str,
    pub fields: FormFields,
    pub errors: &'a FieldErrors,
    pub categories: &'a [Category],
    pub picture: Option<&'a PictureName>,
}

/// Compiled page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns the Tera error when a template fails to parse.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    fn render(&self, template: &str, context: &Context) -> Result<String, Error> {
        self.tera
            .render(template, context)
            .map_err(|err| Error::internal(format!("failed to render {template}: {err}")))
    }

    pub fn product_list(&self, title: &str, products: &[Product]) -> Result<String, Error> {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("products", products);
        self.render("list.html", &context)
    }

    pub fn product_detail(&self, product: &Product) -> Result<String, Error> {
        let mut context = Context::new();
        context.insert("title", &format!("Product detail: {}", product.name));
        context.insert("product", product);
        self.render("detail.html", &context)
    }

    /// Render the create/edit form, including any field errors.
    pub fn product_form(&self, page: &FormPage<'_>) -> Result<String, Error> {
        let mut context = Context::new();
        context.insert("title", page.title);
        context.insert("form", &page.fields);
        context.insert("errors", page.errors);
        context.insert("categories", page.categories);
        context.insert("picture", &page.picture);
        context.insert(
            "button",
            if page.fields.id.is_empty() { "Create" } else { "Save" },
        );
        self.render("form.html", &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryId, ProductId};
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    #[fixture]
    fn views() -> Views {
        Views::new().expect("templates compile")
    }

    fn product(name: &str) -> Product {
        Product {
            id: ProductId::random(),
            name: name.to_owned(),
            description: "<b>bold</b>".to_owned(),
            price: 99.5,
            created_at: NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date"),
            picture: None,
            category: Category::new(CategoryId::random(), "Garden"),
        }
    }

    #[rstest]
    fn list_links_each_product(views: Views) {
        let products = vec![product("RAKE"), product("SHOVEL")];
        let html = views.product_list("Products", &products).expect("renders");
        for item in &products {
            assert!(html.contains(&format!("/detail/{}", item.id)));
        }
        assert!(html.contains("SHOVEL"));
    }

    #[rstest]
    fn detail_escapes_user_text(views: Views) {
        let html = views.product_detail(&product("Rake")).expect("renders");
        assert!(html.contains("&lt;b&gt;bold"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[rstest]
    fn detail_link_percent_encodes_picture_name(views: Views) {
        let mut item = product("Poster");
        let picture = PictureName::for_upload("sale#2 50%.png").expect("filename present");
        item.picture = Some(picture.clone());

        let html = views.product_detail(&item).expect("renders");

        let token = picture.as_str().trim_end_matches("sale#250%.png");
        assert!(html.contains(&format!("href=\"/uploads/img/{token}sale%23250%25.png\"")));
        assert!(!html.contains("sale#"));
    }

    #[rstest]
    fn form_link_percent_encodes_current_picture(views: Views) {
        let existing = product("Poster");
        let picture = PictureName::for_upload("a?b.png").expect("filename present");
        let html = views
            .product_form(&FormPage {
                title: "Edit product",
                fields: FormFields::from(&existing),
                errors: &FieldErrors::default(),
                categories: &[],
                picture: Some(&picture),
            })
            .expect("renders");
        assert!(html.contains("a%3Fb.png\""));
        assert!(!html.contains("a?b.png"));
    }

    #[rstest]
    fn form_shows_errors_and_selected_category(views: Views) {
        let garden = Category::new(CategoryId::random(), "Garden");
        let submission = ProductSubmission {
            name: Some(String::new()),
            category_id: Some(garden.id.to_string()),
            ..ProductSubmission::default()
        };
        let errors = FieldErrors::single("name", "name must not be empty");
        let categories = [garden.clone()];
        let html = views
            .product_form(&FormPage {
                title: "New product",
                fields: FormFields::from(&submission),
                errors: &errors,
                categories: &categories,
                picture: None,
            })
            .expect("renders");
        assert!(html.contains("name must not be empty"));
        assert!(html.contains(&format!("value=\"{}\" selected", garden.id)));
        assert!(!html.contains("type=\"hidden\""));
    }

    #[rstest]
    fn edit_form_keeps_the_id(views: Views) {
        let existing = product("Rake");
        let html = views
            .product_form(&FormPage {
                title: "Edit product",
                fields: FormFields::from(&existing),
                errors: &FieldErrors::default(),
                categories: &[],
                picture: None,
            })
            .expect("renders");
        assert!(html.contains(&format!("name=\"id\" value=\"{}\"", existing.id)));
        assert!(html.contains("2026-06-01"));
    }
}
