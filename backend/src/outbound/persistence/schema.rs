// Diesel table definitions for the catalog schema.
// Keep in sync with backend/migrations.

diesel::table! {
    categories (id) {
        id -> Uuid,
        name -> Varchar,
    }
}

diesel::table! {
    /// Product documents; `category` holds an embedded copy of the category.
    products (id) {
        id -> Uuid,
        name -> Varchar,
        description -> Text,
        price -> Float8,
        created_at -> Date,
        picture -> Nullable<Varchar>,
        category -> Jsonb,
    }
}

diesel::allow_tables_to_appear_in_same_query!(categories, products);
