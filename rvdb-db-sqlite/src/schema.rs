// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    review (rowid) {
        rowid -> BigInt,
        id -> Text,
        booking_id -> Nullable<Text>,
        customer_id -> Nullable<Text>,
        provider_id -> Text,
        rating -> SmallInt,
        comment -> Nullable<Text>,
        is_admin_created -> Bool,
        admin_created_by -> Nullable<Text>,
        admin_notes -> Nullable<Text>,
        visibility -> SmallInt,
        is_verified -> Bool,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Synthetic customers
///////////////////////////////////////////////////////////////////////

table! {
    synthetic_customer (rowid) {
        rowid -> BigInt,
        id -> Text,
        first_name -> Text,
        last_name -> Text,
        marker -> Text,
        placeholder_contact -> Text,
        is_active -> Bool,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Rating summaries
///////////////////////////////////////////////////////////////////////

table! {
    rating_summary (rowid) {
        rowid -> BigInt,
        provider_id -> Text,
        avg_rating -> Double,
        review_count -> BigInt,
        stars_1 -> BigInt,
        stars_2 -> BigInt,
        stars_3 -> BigInt,
        stars_4 -> BigInt,
        stars_5 -> BigInt,
        updated_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Audit log
///////////////////////////////////////////////////////////////////////

table! {
    audit_log (rowid) {
        rowid -> BigInt,
        id -> Text,
        review_id -> Nullable<Text>,
        actor_id -> Text,
        action -> SmallInt,
        before_state -> Nullable<Text>,
        after_state -> Nullable<Text>,
        reason -> Nullable<Text>,
        created_at -> BigInt,
    }
}
