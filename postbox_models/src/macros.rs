macro_rules! nutype_string {
    ($ident:ident ( $($args:tt)* )) => {
        #[::nutype::nutype(
            $($args)*,
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                Hash,
                Deref,
                TryFrom,
                Serialize,
                Deserialize
            )
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
