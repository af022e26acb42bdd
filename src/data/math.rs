//! Greek letters and math symbols
//!
//! Every row here is a math symbol, so each also decodes from `$...$` and
//! `\(...\)` in text mode and encodes as `$...$` outside math.

use crate::core::table::Symbol;

pub static GREEK_LETTERS: &[Symbol] = &[
    Symbol::math("α", r"\alpha"),
    Symbol::math("β", r"\beta"),
    Symbol::math("γ", r"\gamma"),
    Symbol::math("δ", r"\delta"),
    Symbol::math("ε", r"\epsilon"),
    Symbol::math("ϵ", r"\varepsilon"),
    Symbol::math("ζ", r"\zeta"),
    Symbol::math("η", r"\eta"),
    Symbol::math("θ", r"\theta"),
    Symbol::math("ϑ", r"\vartheta"),
    Symbol::math("ι", r"\iota"),
    Symbol::math("κ", r"\kappa"),
    Symbol::math("λ", r"\lambda"),
    Symbol::math("μ", r"\mu"),
    Symbol::math("ν", r"\nu"),
    Symbol::math("ξ", r"\xi"),
    Symbol::math("ο", r"\omicron"),
    Symbol::math("π", r"\pi"),
    Symbol::math("ϖ", r"\varpi"),
    Symbol::math("ρ", r"\rho"),
    Symbol::math("ϱ", r"\varrho"),
    Symbol::math("σ", r"\sigma"),
    Symbol::math("ς", r"\varsigma"),
    Symbol::math("τ", r"\tau"),
    Symbol::math("υ", r"\upsilon"),
    Symbol::math("φ", r"\phi"),
    Symbol::math("ϕ", r"\varphi"),
    Symbol::math("χ", r"\chi"),
    Symbol::math("ψ", r"\psi"),
    Symbol::math("ω", r"\omega"),
    Symbol::math("Α", r"\Alpha"),
    Symbol::math("Β", r"\Beta"),
    Symbol::math("Γ", r"\Gamma"),
    Symbol::math("Δ", r"\Delta"),
    Symbol::math("Ε", r"\Epsilon"),
    Symbol::math("Ζ", r"\Zeta"),
    Symbol::math("Η", r"\Eta"),
    Symbol::math("Θ", r"\Theta"),
    Symbol::math("Ι", r"\Iota"),
    Symbol::math("Κ", r"\Kappa"),
    Symbol::math("Λ", r"\Lambda"),
    Symbol::math("Μ", r"\Mu"),
    Symbol::math("Ν", r"\Nu"),
    Symbol::math("Ξ", r"\Xi"),
    Symbol::math("Ο", r"\Omicron"),
    Symbol::math("Π", r"\Pi"),
    Symbol::math("Ρ", r"\Rho"),
    Symbol::math("Σ", r"\Sigma"),
    Symbol::math("Τ", r"\Tau"),
    Symbol::math("Υ", r"\Upsilon"),
    Symbol::math("Φ", r"\Phi"),
    Symbol::math("Χ", r"\Chi"),
    Symbol::math("Ψ", r"\Psi"),
    Symbol::math("Ω", r"\Omega"),
];

pub static MATH_SYMBOLS: &[Symbol] = &[
    Symbol::math("∼", r"\sim"),
    Symbol::math("×", r"\times"),
    Symbol::math("÷", r"\div"),
    Symbol::math("∂", r"\partial"),
    Symbol::math("∏", r"\prod"),
    Symbol::math("∑", r"\sum"),
    Symbol::math("√", r"\surd"),
    Symbol::math("√", r"\sqrt").decode_only(),
    Symbol::math("∞", r"\infty"),
    Symbol::math("∫", r"\int"),
    Symbol::math("∮", r"\oint"),
    Symbol::math("∩", r"\cap"),
    Symbol::math("∪", r"\cup"),
    Symbol::math("→", r"\rightarrow"),
    Symbol::math("→", r"\to").decode_only(),
    Symbol::math("⇒", r"\Rightarrow"),
    Symbol::math("←", r"\leftarrow"),
    Symbol::math("⇐", r"\Leftarrow"),
    Symbol::math("↔", r"\leftrightarrow"),
    Symbol::math("⇔", r"\Leftrightarrow"),
    Symbol::math("↑", r"\uparrow"),
    Symbol::math("↓", r"\downarrow"),
    Symbol::math("∨", r"\vee"),
    Symbol::math("∧", r"\wedge"),
    Symbol::math("≈", r"\approx"),
    Symbol::math("≠", r"\neq"),
    Symbol::math("≠", r"\ne").decode_only(),
    Symbol::math("≤", r"\leq"),
    Symbol::math("≤", r"\le").decode_only(),
    Symbol::math("≥", r"\geq"),
    Symbol::math("≥", r"\ge").decode_only(),
    Symbol::math("≪", r"\ll"),
    Symbol::math("≫", r"\gg"),
    Symbol::math("≡", r"\equiv"),
    Symbol::math("∝", r"\propto"),
    Symbol::math("∈", r"\in"),
    Symbol::math("∉", r"\notin"),
    Symbol::math("⊂", r"\subset"),
    Symbol::math("⊃", r"\supset"),
    Symbol::math("⊆", r"\subseteq"),
    Symbol::math("⊇", r"\supseteq"),
    Symbol::math("∀", r"\forall"),
    Symbol::math("∃", r"\exists"),
    Symbol::math("∅", r"\emptyset"),
    Symbol::math("∇", r"\nabla"),
    Symbol::math("∘", r"\circ"),
    Symbol::math("⊕", r"\oplus"),
    Symbol::math("⊗", r"\otimes"),
    Symbol::math("⊥", r"\perp"),
    Symbol::math("∥", r"\parallel"),
    Symbol::math("∓", r"\mp"),
    Symbol::math("ℏ", r"\hbar"),
    Symbol::math("ℓ", r"\ell"),
    Symbol::math("ℵ", r"\aleph"),
    Symbol::math("⟨", r"\langle"),
    Symbol::math("⟩", r"\rangle"),
    // blackboard bold: the braced form only decodes, ahead of the
    // braced variant of the spaced form
    Symbol::math("ℕ", r"\mathbb{N}").decode_only(),
    Symbol::math("ℕ", r"\mathbb N"),
    Symbol::math("ℤ", r"\mathbb{Z}").decode_only(),
    Symbol::math("ℤ", r"\mathbb Z"),
    Symbol::math("ℚ", r"\mathbb{Q}").decode_only(),
    Symbol::math("ℚ", r"\mathbb Q"),
    Symbol::math("ℝ", r"\mathbb{R}").decode_only(),
    Symbol::math("ℝ", r"\mathbb R"),
    Symbol::math("ℂ", r"\mathbb{C}").decode_only(),
    Symbol::math("ℂ", r"\mathbb C"),
];
