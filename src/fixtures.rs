#[cfg(test)]
pub mod test {
    use std::time::Duration;

    use url::Url;

    use crate::Envstruct;

    #[derive(Envstruct, Debug, Default, PartialEq)]
    pub struct AppConfig {
        #[env("database_url,required")]
        pub database_url: String,

        #[env("host")]
        pub host: String,

        #[env("port")]
        pub port: u16,

        #[env("debug")]
        pub debug: bool,

        #[env("offset")]
        pub offset: i32,

        #[env("timeout")]
        pub timeout: Duration,

        #[env("tags")]
        pub tags: Vec<String>,

        #[env("ports")]
        pub ports: Vec<u16>,

        #[env("callback")]
        pub callback: Option<Url>,

        #[env("api_token,,noreport")]
        pub api_token: Option<String>,
    }

    // -- Fixture for ordering and fail-fast tests -------------------------------

    #[derive(Envstruct, Debug, Default, PartialEq)]
    pub struct Ordered {
        #[env("first")]
        pub first: String,

        #[env("second,required")]
        pub second: String,

        #[env("count")]
        pub count: i64,

        #[env("third")]
        pub third: String,
    }

    // -- Fixture for fields without a conversion rule ---------------------------

    #[derive(Envstruct, Debug, Default, PartialEq)]
    pub struct Loose {
        #[env("ratio")]
        pub ratio: f64,

        #[env("name")]
        pub name: String,

        pub untagged: String,
    }

    // -- Fixture for integer widths ---------------------------------------------

    #[derive(Envstruct, Debug, Default, PartialEq)]
    pub struct Wide {
        #[env("big")]
        pub big: i128,

        #[env("huge")]
        pub huge: u128,

        #[env("small")]
        pub small: i8,
    }

    #[test]
    fn field_table_follows_declaration_order() {
        let names: Vec<&str> = Ordered::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, ["first", "second", "count", "third"]);
    }

    #[test]
    fn field_table_records_tags_and_types() {
        let field = &AppConfig::FIELDS[0];
        assert_eq!(field.name, "database_url");
        assert_eq!(field.tag, "database_url,required");
        assert_eq!(field.type_name, "String");

        let untagged = &Loose::FIELDS[2];
        assert_eq!(untagged.tag, "");
    }

    #[test]
    fn field_table_classifies_kinds() {
        use crate::types::{Kind, SpecialType};

        let kinds: Vec<Kind> = AppConfig::FIELDS.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            [
                Kind::Text,
                Kind::Text,
                Kind::Unsigned,
                Kind::Bool,
                Kind::Signed,
                Kind::Special(SpecialType::Duration),
                Kind::Seq(&Kind::Text),
                Kind::Seq(&Kind::Unsigned),
                Kind::Optional(&Kind::Special(SpecialType::Url)),
                Kind::Optional(&Kind::Text),
            ]
        );
        assert_eq!(Loose::FIELDS[0].kind, Kind::Other);
    }
}
