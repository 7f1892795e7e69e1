table! {
    comments (id) {
        id -> BigInt,
        user_email -> Nullable<Text>,
        name -> Nullable<Text>,
        rating -> SmallInt,
        comment -> Text,
        timestamp -> BigInt,
    }
}
