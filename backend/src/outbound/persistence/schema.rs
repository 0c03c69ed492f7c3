//! Diesel table definitions.
//!
//! These must match `migrations/` exactly; `diesel print-schema` against a
//! migrated database regenerates them.

diesel::table! {
    /// Contact records with a free-form address.
    users (id) {
        id -> Int4,
        #[max_length = 50]
        firstname -> Varchar,
        #[max_length = 50]
        lastname -> Varchar,
        #[max_length = 10]
        gender -> Varchar,
        #[max_length = 15]
        phone -> Varchar,
        #[max_length = 100]
        address_line1 -> Varchar,
        #[max_length = 100]
        address_line2 -> Nullable<Varchar>,
        #[max_length = 6]
        pin -> Varchar,
        #[max_length = 50]
        district -> Varchar,
        #[max_length = 50]
        state -> Varchar,
    }
}

diesel::table! {
    /// Staff records; `employee_id` carries a unique constraint.
    employees (id) {
        id -> Int4,
        #[max_length = 50]
        employee_name -> Varchar,
        #[max_length = 10]
        employee_id -> Varchar,
        #[max_length = 50]
        department -> Varchar,
        #[max_length = 50]
        profile -> Varchar,
    }
}

diesel::table! {
    /// State lookup list.
    states (id) {
        id -> Int4,
        #[max_length = 50]
        name -> Varchar,
    }
}

diesel::table! {
    /// District lookup list.
    districts (id) {
        id -> Int4,
        #[max_length = 50]
        name -> Varchar,
    }
}
