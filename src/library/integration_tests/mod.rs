
// Level caps below INFO compile the debug emission out.
#[cfg(all(
    feature = "tracing",
    not(any(
        feature = "tracing-max_level_off",
        feature = "tracing-max_level_error",
        feature = "tracing-max_level_warn",
        all(
            not(debug_assertions),
            any(
                feature = "tracing-release_max_level_off",
                feature = "tracing-release_max_level_error",
                feature = "tracing-release_max_level_warn",
            )
        ),
    ))
))]
mod debug_emission;
#[cfg(all(
    feature = "tracing",
    not(any(
        feature = "tracing-max_level_off",
        feature = "tracing-max_level_error",
        feature = "tracing-max_level_warn",
        all(
            not(debug_assertions),
            any(
                feature = "tracing-release_max_level_off",
                feature = "tracing-release_max_level_error",
                feature = "tracing-release_max_level_warn",
            )
        ),
    ))
))]
mod helper;
