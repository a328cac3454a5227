// SPDX-License-Identifier: GPL-3.0-only

//! Field-to-flag marshaling for tool argument vectors.
//!
//! Each options record registers its fields into an [`ArgSpec`] table in
//! declaration order. Rendering emits flag tokens first and the positional
//! segment last, since the e2fsprogs tools expect their operands to trail
//! all options.

/// Ordered argument table for one tool invocation.
///
/// Rendering is deterministic: registering the same fields with the same
/// values always produces the same token vector.
#[derive(Debug, Default)]
pub struct ArgSpec {
    flags: Vec<String>,
    positionals: Vec<(usize, String)>,
}

impl ArgSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a positional operand at a fixed index. Empty values emit
    /// nothing, leaving the slot vacant.
    pub fn positional(&mut self, index: usize, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.positionals.push((index, value.to_string()));
        }
        self
    }

    /// Register a boolean flag. Emits `-f` iff enabled.
    pub fn switch(&mut self, flag: char, enabled: bool) -> &mut Self {
        if enabled {
            self.flags.push(format!("-{flag}"));
        }
        self
    }

    /// Register a tri-state numeric flag. A present value emits `-f <n>`
    /// even when the value is zero; an absent value emits nothing.
    pub fn numeric(&mut self, flag: char, value: Option<u64>) -> &mut Self {
        if let Some(value) = value {
            self.flags.push(format!("-{flag}"));
            self.flags.push(value.to_string());
        }
        self
    }

    /// Register a string flag. Emits `-f <value>` iff non-empty.
    pub fn text(&mut self, flag: char, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.flags.push(format!("-{flag}"));
            self.flags.push(value.to_string());
        }
        self
    }

    /// Render the final argument vector: flags in registration order, then
    /// positionals in ascending index order.
    pub fn render(mut self) -> Vec<String> {
        self.positionals.sort_by_key(|(index, _)| *index);
        let mut args = self.flags;
        args.extend(self.positionals.into_iter().map(|(_, value)| value));
        args
    }
}

/// Conversion from a typed options record to its argument table.
///
/// Implementations register every field in declaration order so the
/// rendered vector is stable across calls.
pub trait ToArgs {
    fn to_args(&self) -> ArgSpec;
}

#[cfg(test)]
mod tests {
    use super::ArgSpec;

    #[test]
    fn empty_table_renders_nothing() {
        let spec = ArgSpec::new();
        assert!(spec.render().is_empty());
    }

    #[test]
    fn default_values_emit_no_tokens() {
        let mut spec = ArgSpec::new();
        spec.positional(0, "")
            .switch('c', false)
            .numeric('b', None)
            .text('L', "");
        assert!(spec.render().is_empty());
    }

    #[test]
    fn switch_emits_single_token() {
        let mut spec = ArgSpec::new();
        spec.switch('M', true);
        assert_eq!(spec.render(), vec!["-M"]);
    }

    #[test]
    fn present_zero_is_not_absent() {
        let mut spec = ArgSpec::new();
        spec.numeric('b', Some(0));
        assert_eq!(spec.render(), vec!["-b", "0"]);
    }

    #[test]
    fn positionals_trail_flags_in_index_order() {
        let mut spec = ArgSpec::new();
        spec.positional(1, "100M")
            .positional(0, "/dev/loop0")
            .text('L', "vol");
        assert_eq!(spec.render(), vec!["-L", "vol", "/dev/loop0", "100M"]);
    }

    #[test]
    fn rendering_is_deterministic() {
        let build = || {
            let mut spec = ArgSpec::new();
            spec.positional(0, "/dev/loop0")
                .switch('f', true)
                .numeric('S', Some(32))
                .text('z', "undo.e2undo");
            spec.render()
        };
        assert_eq!(build(), build());
    }
}
