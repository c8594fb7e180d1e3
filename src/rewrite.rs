//! Identifier substitution for file contents and file names.

/// Linkage-macro suffix used by Unreal module export macros (`GAME_API` etc.).
pub const MACRO_SUFFIX: &str = "_API";

/// Rewrite file contents: the macro-qualified form first, then the bare name.
///
/// The two passes must run in this order. The macro token is
/// `UPPER(old) + "_API"`; if the bare-name pass ran first it would rewrite the
/// `old` portion of mixed-case macro tokens (e.g. `Game_API` spellings would
/// survive, and `GAME_API` would be left behind whenever `old` is not already
/// uppercase), leaving the macro pass nothing to match.
///
/// Replacement is plain case-sensitive substring substitution with no word
/// boundary checks. An occurrence of `old` inside a longer identifier
/// (`MyGameExtra` with `old = "Game"`) is replaced too. That matches what
/// Unreal's own naming conventions produce (`AGameGameMode`, `FGameModule`)
/// and is intentional, not an oversight.
pub fn rewrite_content(text: &str, old: &str, new: &str) -> String {
    let old_macro = format!("{}{}", old.to_uppercase(), MACRO_SUFFIX);
    let new_macro = format!("{}{}", new.to_uppercase(), MACRO_SUFFIX);

    text.replace(&old_macro, &new_macro).replace(old, new)
}

/// Rewrite a file or directory name. Bare substring replacement only; file
/// names never carry the macro suffix.
pub fn rewrite_name(name: &str, old: &str, new: &str) -> String {
    name.replace(old, new)
}
