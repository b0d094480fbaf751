//! Character reference states of the HTML tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)

use super::core::{HTMLTokenizer, TokenizerState};
use super::named_character_references::{any_entity_has_prefix, lookup_entity};

/// [§ 13.2.5.80](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
/// "If the number is one of the numbers in the first column of the following
/// table, then find the row with that number in the first column, and set the
/// character reference code to the number in the second column."
const C1_REPLACEMENTS: &[(u32, u32)] = &[
    (0x80, 0x20AC),
    (0x82, 0x201A),
    (0x83, 0x0192),
    (0x84, 0x201E),
    (0x85, 0x2026),
    (0x86, 0x2020),
    (0x87, 0x2021),
    (0x88, 0x02C6),
    (0x89, 0x2030),
    (0x8A, 0x0160),
    (0x8B, 0x2039),
    (0x8C, 0x0152),
    (0x8E, 0x017D),
    (0x91, 0x2018),
    (0x92, 0x2019),
    (0x93, 0x201C),
    (0x94, 0x201D),
    (0x95, 0x2022),
    (0x96, 0x2013),
    (0x97, 0x2014),
    (0x98, 0x02DC),
    (0x99, 0x2122),
    (0x9A, 0x0161),
    (0x9B, 0x203A),
    (0x9C, 0x0153),
    (0x9E, 0x017E),
    (0x9F, 0x0178),
];

impl HTMLTokenizer {
    /// "Consumed as part of an attribute"
    pub(super) const fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                TokenizerState::AttributeValueDoubleQuoted
                    | TokenizerState::AttributeValueSingleQuoted
                    | TokenizerState::AttributeValueUnquoted
            )
        )
    }

    /// "Flush code points consumed as a character reference": append the
    /// temporary buffer to the current attribute's value, or emit it as
    /// character tokens.
    pub(super) fn flush_code_points_consumed_as_character_reference(&mut self) {
        let buffer = std::mem::take(&mut self.temporary_buffer);
        if self.is_consumed_as_part_of_attribute() {
            for c in buffer.chars() {
                self.append_to_attribute_value(c);
            }
        } else {
            for c in buffer.chars() {
                self.emit_character_token(c);
            }
        }
    }

    /// The state to go back to once the reference is resolved.
    fn take_return_state(&mut self) -> TokenizerState {
        self.return_state.take().unwrap_or(TokenizerState::Data)
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    pub(super) fn handle_character_reference_state(&mut self) {
        // "Set the temporary buffer to the empty string. Append a U+0026
        // AMPERSAND (&) character to the temporary buffer."
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');

        match self.current_input_character {
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            _ => {
                self.flush_code_points_consumed_as_character_reference();
                let return_state = self.take_return_state();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// "Consume the maximum number of characters possible, where the consumed
    /// characters are one of the identifiers in the first column of the named
    /// character references table."
    ///
    /// Characters are read while some entity name still has the buffer as a
    /// prefix. Anything read past the longest match is put back.
    pub(super) fn handle_named_character_reference_state(&mut self) {
        let mut longest_match: Option<(usize, &'static str)> = None;

        // Entered by reconsuming the first alphanumeric.
        if let Some(c) = self.current_input_character {
            self.temporary_buffer.push(c);
            if let Some(replacement) = lookup_entity(&self.temporary_buffer[1..]) {
                longest_match = Some((self.temporary_buffer.len(), replacement));
            }
        }

        loop {
            let name = &self.temporary_buffer[1..];
            if name.ends_with(';') || !any_entity_has_prefix(name) {
                break;
            }
            match self.peek_codepoint(0) {
                Some(c) if c.is_ascii_alphanumeric() || c == ';' => {
                    self.current_pos += 1;
                    self.temporary_buffer.push(c);
                    if let Some(replacement) = lookup_entity(&self.temporary_buffer[1..]) {
                        longest_match = Some((self.temporary_buffer.len(), replacement));
                    }
                }
                _ => break,
            }
        }

        let Some((match_len, replacement)) = longest_match else {
            // "Flush code points consumed as a character reference. Switch to
            // the ambiguous ampersand state."
            self.flush_code_points_consumed_as_character_reference();
            self.switch_to(TokenizerState::AmbiguousAmpersand);
            return;
        };

        // Put back what was read past the match; the buffer is ASCII only.
        self.current_pos -= self.temporary_buffer.len() - match_len;
        self.temporary_buffer.truncate(match_len);
        let ends_with_semicolon = self.temporary_buffer.ends_with(';');

        // "If the character reference was consumed as part of an attribute,
        // and the last character matched is not a U+003B SEMICOLON character
        // (;), and the next input character is either a U+003D EQUALS SIGN
        // character (=) or an ASCII alphanumeric, then, for historical
        // reasons, flush code points consumed as a character reference and
        // switch to the return state."
        if self.is_consumed_as_part_of_attribute()
            && !ends_with_semicolon
            && self
                .peek_codepoint(0)
                .is_some_and(|c| c == '=' || c.is_ascii_alphanumeric())
        {
            self.flush_code_points_consumed_as_character_reference();
            let return_state = self.take_return_state();
            self.switch_to(return_state);
            return;
        }

        if !ends_with_semicolon {
            self.log_parse_error("missing-semicolon-after-character-reference");
        }

        self.temporary_buffer.clear();
        self.temporary_buffer.push_str(replacement);
        self.flush_code_points_consumed_as_character_reference();
        let return_state = self.take_return_state();
        self.switch_to(return_state);
    }

    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    pub(super) fn handle_ambiguous_ampersand_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphanumeric() => {
                if self.is_consumed_as_part_of_attribute() {
                    self.append_to_attribute_value(c);
                } else {
                    self.emit_character_token(c);
                }
            }
            Some(';') => {
                self.log_parse_error("unknown-named-character-reference");
                let return_state = self.take_return_state();
                self.reconsume_in(return_state);
            }
            _ => {
                let return_state = self.take_return_state();
                self.reconsume_in(return_state);
            }
        }
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    pub(super) fn handle_numeric_character_reference_state(&mut self) {
        // "Set the character reference code to zero (0)."
        self.character_reference_code = 0;

        match self.current_input_character {
            Some(c @ ('x' | 'X')) => {
                self.temporary_buffer.push(c);
                self.switch_to(TokenizerState::HexadecimalCharacterReferenceStart);
            }
            _ => self.reconsume_in(TokenizerState::DecimalCharacterReferenceStart),
        }
    }

    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    pub(super) fn handle_hexadecimal_character_reference_start_state(&mut self) {
        if self
            .current_input_character
            .is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.reconsume_in(TokenizerState::HexadecimalCharacterReference);
        } else {
            self.abandon_numeric_character_reference();
        }
    }

    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    pub(super) fn handle_decimal_character_reference_start_state(&mut self) {
        if self
            .current_input_character
            .is_some_and(|c| c.is_ascii_digit())
        {
            self.reconsume_in(TokenizerState::DecimalCharacterReference);
        } else {
            self.abandon_numeric_character_reference();
        }
    }

    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    pub(super) fn handle_hexadecimal_character_reference_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_hexdigit() => {
                self.push_reference_digit(16, c);
            }
            Some(';') => self.finish_numeric_character_reference(false),
            _ => {
                self.log_parse_error("missing-semicolon-after-character-reference");
                self.finish_numeric_character_reference(true);
            }
        }
    }

    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    pub(super) fn handle_decimal_character_reference_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_digit() => {
                self.push_reference_digit(10, c);
            }
            Some(';') => self.finish_numeric_character_reference(false),
            _ => {
                self.log_parse_error("missing-semicolon-after-character-reference");
                self.finish_numeric_character_reference(true);
            }
        }
    }

    /// "Multiply the character reference code by 16 (or 10) ... Add a numeric
    /// version of the current input character". Saturates just past the
    /// Unicode range so huge references stay out of range.
    fn push_reference_digit(&mut self, radix: u32, c: char) {
        let digit = c.to_digit(radix).unwrap_or(0);
        self.character_reference_code = self
            .character_reference_code
            .saturating_mul(radix)
            .saturating_add(digit)
            .min(0x11_0000);
    }

    /// "This is an absence-of-digits-in-numeric-character-reference parse
    /// error. Flush code points consumed as a character reference. Reconsume
    /// in the return state."
    fn abandon_numeric_character_reference(&mut self) {
        self.log_parse_error("absence-of-digits-in-numeric-character-reference");
        self.flush_code_points_consumed_as_character_reference();
        let return_state = self.take_return_state();
        self.reconsume_in(return_state);
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    ///
    /// Run inline rather than as a state of its own, since it consumes
    /// nothing. `reconsume` is true when the reference ended without `;`.
    fn finish_numeric_character_reference(&mut self, reconsume: bool) {
        let code = self.character_reference_code;
        let replacement = match code {
            0 | 0xD800..=0xDFFF => '\u{FFFD}',
            0x80..=0x9F => C1_REPLACEMENTS
                .iter()
                .find(|(from, _)| *from == code)
                .and_then(|&(_, to)| char::from_u32(to))
                .or_else(|| char::from_u32(code))
                .unwrap_or('\u{FFFD}'),
            _ => char::from_u32(code).unwrap_or('\u{FFFD}'),
        };

        self.temporary_buffer.clear();
        self.temporary_buffer.push(replacement);
        self.flush_code_points_consumed_as_character_reference();

        let return_state = self.take_return_state();
        if reconsume {
            self.reconsume_in(return_state);
        } else {
            self.switch_to(return_state);
        }
    }
}
