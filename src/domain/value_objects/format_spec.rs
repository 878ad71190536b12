//! Field format specs for `IndexFormat` placeholders
//!
//! Accepts the padding subset of the familiar `[[fill]align][sign][0][width][type]`
//! mini-language: `{item_index:>2}`, `{item_index:03}`, `{item_name:<12}`.
//! Numbers align right by default, names align left.

/// Where padding goes relative to the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Align {
    Left,
    Right,
    Center,
    /// Padding between the sign and the digits (`=`, numbers only)
    AfterSign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum Sign {
    #[default]
    Negative,
    Always,
    Space,
}

/// Parsed `:spec` of one placeholder; the default spec renders the value unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(super) struct FormatSpec {
    fill: Option<char>,
    align: Option<Align>,
    sign: Sign,
    zero: bool,
    width: usize,
}

impl FormatSpec {
    /// Spec for `{item_index:...}`; the only type allowed is `d`.
    pub(super) fn parse_index(spec: &str) -> Result<Self, String> {
        Self::parse(spec, 'd')
    }

    /// Spec for `{item_name:...}`; the only type allowed is `s`, and signs
    /// and `=` alignment are rejected.
    pub(super) fn parse_name(spec: &str) -> Result<Self, String> {
        let parsed = Self::parse(spec, 's')?;
        if parsed.sign != Sign::Negative {
            return Err(format!("sign not allowed for item_name in '{spec}'"));
        }
        if parsed.align == Some(Align::AfterSign) {
            return Err(format!("'=' alignment not allowed for item_name in '{spec}'"));
        }
        Ok(parsed)
    }

    fn parse(spec: &str, type_char: char) -> Result<Self, String> {
        let chars: Vec<char> = spec.chars().collect();
        let mut parsed = Self::default();
        let mut i = 0;

        if let Some(align) = chars.get(1).copied().and_then(align_of) {
            parsed.fill = Some(chars[0]);
            parsed.align = Some(align);
            i = 2;
        } else if let Some(align) = chars.first().copied().and_then(align_of) {
            parsed.align = Some(align);
            i = 1;
        }

        let sign = match chars.get(i) {
            Some('+') => Some(Sign::Always),
            Some(' ') => Some(Sign::Space),
            Some('-') => Some(Sign::Negative),
            _ => None,
        };
        if let Some(sign) = sign {
            parsed.sign = sign;
            i += 1;
        }

        if chars.get(i) == Some(&'0') {
            parsed.zero = true;
            i += 1;
        }

        let digits: String = chars[i..].iter().take_while(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            parsed.width = digits
                .parse::<u16>()
                .map(usize::from)
                .map_err(|_| format!("width too large in '{spec}'"))?;
            i += digits.len();
        }

        if chars.get(i) == Some(&type_char) {
            i += 1;
        }

        if i != chars.len() {
            return Err(format!("unsupported format spec '{spec}'"));
        }
        Ok(parsed)
    }

    pub(super) fn render_index(&self, value: i128) -> String {
        let sign = match (value < 0, self.sign) {
            (true, _) => "-",
            (false, Sign::Always) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Negative) => "",
        };
        let digits = value.unsigned_abs().to_string();

        let align = match (self.align, self.zero) {
            (Some(align), _) => align,
            (None, true) => Align::AfterSign,
            (None, false) => Align::Right,
        };
        self.pad(sign, &digits, align)
    }

    pub(super) fn render_name(&self, value: &str) -> String {
        self.pad("", value, self.align.unwrap_or(Align::Left))
    }

    fn pad(&self, sign: &str, body: &str, align: Align) -> String {
        let len = sign.chars().count() + body.chars().count();
        let padding = self.width.saturating_sub(len);
        if padding == 0 {
            return format!("{sign}{body}");
        }

        let fill = self
            .fill
            .unwrap_or(if self.zero { '0' } else { ' ' })
            .to_string();
        match align {
            Align::Left => format!("{sign}{body}{}", fill.repeat(padding)),
            Align::Right => format!("{}{sign}{body}", fill.repeat(padding)),
            Align::AfterSign => format!("{sign}{}{body}", fill.repeat(padding)),
            Align::Center => {
                let before = padding / 2;
                format!(
                    "{}{sign}{body}{}",
                    fill.repeat(before),
                    fill.repeat(padding - before)
                )
            }
        }
    }
}

fn align_of(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        '=' => Some(Align::AfterSign),
        _ => None,
    }
}
