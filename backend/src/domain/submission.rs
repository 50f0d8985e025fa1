//! Raw product form submissions and their validation.
//!
//! Submissions keep every field as the text the client sent so a rejected
//! form can be shown again exactly as entered.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CategoryId, ProductId};

/// Product fields as submitted by the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubmission {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub created_at: Option<String>,
    pub category_id: Option<String>,
}

/// Field-level validation messages keyed by the form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// Record a message for `field`, keeping the first message per field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Build a single-field error set.
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Submission that passed field validation; the category is not resolved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: Option<NaiveDate>,
    pub category_id: CategoryId,
}

/// Width of the `products.name` column.
const NAME_MAX_CHARS: usize = 255;

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl ProductSubmission {
    /// Check required fields and parse typed values.
    ///
    /// Every problem is reported, not just the first one.
    ///
    /// # Examples
    /// ```
    /// use catalog::domain::ProductSubmission;
    ///
    /// let submission = ProductSubmission {
    ///     name: Some("Lamp".to_owned()),
    ///     price: Some("abc".to_owned()),
    ///     ..ProductSubmission::default()
    /// };
    /// let errors = submission.validate().expect_err("price and category are invalid");
    /// assert!(errors.get("price").is_some());
    /// assert!(errors.get("categoryId").is_some());
    /// ```
    pub fn validate(&self) -> Result<ValidSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let id = match non_blank(self.id.as_ref()) {
            None => None,
            Some(raw) => match raw.parse::<ProductId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("id", "product id is not valid");
                    None
                }
            },
        };

        let name = match non_blank(self.name.as_ref()) {
            None => {
                errors.add("name", "name must not be empty");
                None
            }
            Some(name) if name.chars().count() > NAME_MAX_CHARS => {
                errors.add(
                    "name",
                    format!("name must be at most {NAME_MAX_CHARS} characters"),
                );
                None
            }
            Some(name) => Some(name.to_owned()),
        };

        let price = match non_blank(self.price.as_ref()) {
            None => {
                errors.add("price", "price is required");
                None
            }
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => {
                    errors.add("price", "price must be a number");
                    None
                }
            },
        };

        let created_at = match non_blank(self.created_at.as_ref()) {
            None => None,
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("createdAt", "date must use the YYYY-MM-DD format");
                    None
                }
            },
        };

        let category_id = match non_blank(self.category_id.as_ref()) {
            None => {
                errors.add("categoryId", "category is required");
                None
            }
            Some(raw) => match raw.parse::<CategoryId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("categoryId", "category is not valid");
                    None
                }
            },
        };

        match (name, price, category_id) {
            (Some(name), Some(price), Some(category_id)) if errors.is_empty() => {
                Ok(ValidSubmission {
                    id,
                    name,
                    description: self.description.clone().unwrap_or_default(),
                    price,
                    created_at,
                    category_id,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const CATEGORY: &str = "2b0c9d1e-4f5a-4a7b-8c9d-0e1f2a3b4c5d";

    #[fixture]
    fn complete() -> ProductSubmission {
        ProductSubmission {
            id: None,
            name: Some("Hewlett Packard Multifunction".to_owned()),
            description: Some("Printer".to_owned()),
            price: Some("2255.89".to_owned()),
            created_at: Some("2026-02-01".to_owned()),
            category_id: Some(CATEGORY.to_owned()),
        }
    }

    #[rstest]
    fn complete_submission_validates(complete: ProductSubmission) {
        let valid = complete.validate().expect("submission is valid");
        assert_eq!(valid.name, "Hewlett Packard Multifunction");
        assert_eq!(valid.price, 2255.89);
        assert_eq!(valid.created_at, NaiveDate::from_ymd_opt(2026, 2, 1));
        assert_eq!(valid.category_id.to_string(), CATEGORY);
        assert!(valid.id.is_none());
    }

    #[rstest]
    fn name_may_fill_the_column(mut complete: ProductSubmission) {
        complete.name = Some("é".repeat(NAME_MAX_CHARS));
        let valid = complete.validate().expect("submission is valid");
        assert_eq!(valid.name.chars().count(), NAME_MAX_CHARS);
    }

    #[rstest]
    fn optional_fields_may_be_blank(mut complete: ProductSubmission) {
        complete.description = None;
        complete.created_at = Some("   ".to_owned());
        complete.id = Some(String::new());
        let valid = complete.validate().expect("submission is valid");
        assert_eq!(valid.description, "");
        assert!(valid.created_at.is_none());
        assert!(valid.id.is_none());
    }

    #[rstest]
    #[case::blank_name(|s: &mut ProductSubmission| s.name = Some("  ".to_owned()), "name")]
    #[case::long_name(|s: &mut ProductSubmission| s.name = Some("x".repeat(256)), "name")]
    #[case::missing_price(|s: &mut ProductSubmission| s.price = None, "price")]
    #[case::text_price(|s: &mut ProductSubmission| s.price = Some("cheap".to_owned()), "price")]
    #[case::infinite_price(|s: &mut ProductSubmission| s.price = Some("inf".to_owned()), "price")]
    #[case::missing_category(|s: &mut ProductSubmission| s.category_id = None, "categoryId")]
    #[case::bad_category(|s: &mut ProductSubmission| s.category_id = Some("x".to_owned()), "categoryId")]
    #[case::bad_date(|s: &mut ProductSubmission| s.created_at = Some("01/02/2026".to_owned()), "createdAt")]
    #[case::bad_id(|s: &mut ProductSubmission| s.id = Some("42".to_owned()), "id")]
    fn invalid_fields_are_reported(
        mut complete: ProductSubmission,
        #[case] mutate: fn(&mut ProductSubmission),
        #[case] field: &str,
    ) {
        mutate(&mut complete);
        let errors = complete.validate().expect_err("submission is invalid");
        assert!(errors.get(field).is_some(), "expected error for {field}");
    }

    #[rstest]
    fn all_problems_are_collected() {
        let errors = ProductSubmission::default()
            .validate()
            .expect_err("empty submission is invalid");
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["categoryId", "name", "price"]);
    }
}
