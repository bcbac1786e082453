use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug_trace")] {
        use std::fmt::Display;

        pub(crate) fn print_line(scope: &str, message: impl Display) {
            println!("@{scope}: {message}");
        }
    }
}

macro_rules! trace {
    ( @pass $field_name:expr, $value:expr ) => {
        #[cfg(feature = "debug_trace")]
        $crate::debug_trace::print_line(
            "pass",
            format_args!("{:?} <- {:?}", $field_name, $value),
        );
    };

    ( @fill $field_name:expr, $action:expr ) => {
        #[cfg(feature = "debug_trace")]
        $crate::debug_trace::print_line(
            "fill",
            format_args!("{:?}: {}", $field_name, $action),
        );
    };

    ( @parse_error $message:expr, $line:expr ) => {
        #[cfg(feature = "debug_trace")]
        $crate::debug_trace::print_line(
            "parse_error",
            format_args!("{} (line {})", $message, $line),
        );
    };
}
