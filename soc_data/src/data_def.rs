#[macro_export]
macro_rules! define_data_enum {
    ($(#[$meta:meta])* $v:vis enum $name:ident for $data:ident { $($data_vis:vis $data_name:ident : $data_type:ty),* ; $($field:ident $arg:tt),* }) => {
        #[derive(Debug, Clone)]
        $v struct $data {
            $($data_vis $data_name : $data_type),*
        }

        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $v enum $name {
            $($field),*
        }

        impl $data {
            const fn new_auto_data($($data_name : $data_type),*) -> $data {
                $data { $($data_name),* }
            }
        }

        impl $name {
            /// Every variant, in the order the game data indexes them.
            pub const ALL: &'static [$name] = &[$($name::$field),*];

            pub fn data(self) -> &'static $data {
                match self {
                    $(
                        $name::$field => {
                            const VAL: $data = $data::new_auto_data $arg;
                            &VAL
                        }
                    ),*
                }
            }

            /// Gets the variant stored at `index` in the game data.
            ///
            /// Returns [`None`] if the index is out of range.
            #[must_use]
            pub fn from_index(index: usize) -> Option<$name> {
                Self::ALL.get(index).copied()
            }
        }
    };
}
