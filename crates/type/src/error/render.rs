// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::error::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		self.render_into(&mut output, d, 0);
		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}

	fn render_into(&self, output: &mut String, d: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = write!(output, "{}error[{}]: {}", indent, d.code, d.message);

		if d.fragment.is_located() {
			let _ = write!(output, "\n{} --> {}", indent, d.fragment);
			if !d.fragment.text().is_empty() {
				let _ = write!(output, " `{}`", d.fragment.text());
			}
			if let Some(label) = &d.label {
				let _ = write!(output, "\n{}  = {}", indent, label);
			}
		}

		if let Some(help) = &d.help {
			let _ = write!(output, "\n{}help: {}", indent, help);
		}

		for note in &d.notes {
			let _ = write!(output, "\n{}note: {}", indent, note);
		}

		if let Some(cause) = &d.cause {
			let _ = write!(output, "\n{}caused by:\n", indent);
			self.render_into(output, cause, depth + 1);
		}
	}
}
