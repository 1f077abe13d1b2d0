//! Translation driver.
//!
//! [`Translator`] owns the output sink and the semantic state (type
//! registry and scope stack) for one file. The emitter methods live in
//! the sibling modules and attach to this struct; this module holds the
//! entry point, the per-file framing, and the predefined environment.

use std::fmt;

use bumpalo::Bump;
use pasgo_ast::{
    ArraySpec, Builtin, ConstExpr, ConstValue, Expr, File, Program, StringSpec, TypeIdent,
    TypeSpec, Unit,
};
use pasgo_core::{NameId, Span};
use rustc_hash::FxHashMap;

use crate::Result;
use crate::registry::TypeRegistry;
use crate::scope::{ScopeKind, ScopeStack};

/// Translate one parsed Pascal file to Go source text.
///
/// `units` supplies the interfaces of every unit the file may name in a
/// uses clause; unknown names are skipped without error. `arena` must be
/// the allocation target of the passed AST, and stays usable for the
/// nodes the translator itself synthesizes. Output goes to `out`
/// unindented.
pub fn translate<'ast, W: fmt::Write>(
    file: File<'ast>,
    units: &[&'ast Unit<'ast>],
    arena: &'ast Bump,
    out: &mut W,
) -> Result<()> {
    Translator::new(arena, units, out).run(file)
}

/// Single-use emitter for one file. Fails fast: after the first error
/// the output is incomplete and the translator should be discarded.
pub struct Translator<'ast, W> {
    pub(crate) arena: &'ast Bump,
    pub(crate) units: FxHashMap<NameId, &'ast Unit<'ast>>,
    pub(crate) types: TypeRegistry<'ast>,
    pub(crate) scopes: ScopeStack<'ast>,
    pub(crate) out: W,
}

impl<'ast, W: fmt::Write> Translator<'ast, W> {
    pub fn new(arena: &'ast Bump, units: &[&'ast Unit<'ast>], out: W) -> Self {
        let mut unit_map = FxHashMap::default();
        for unit in units {
            unit_map.insert(NameId::of(unit.name), *unit);
        }
        let mut translator = Self {
            arena,
            units: unit_map,
            types: TypeRegistry::new(),
            scopes: ScopeStack::new(),
            out,
        };
        translator.scopes.push(ScopeKind::Global, None);
        translator.predefine();
        translator
    }

    /// Names the runtime provides without any unit being loaded.
    fn predefine(&mut self) {
        // Port is array[0..1000] of integer in the Turbo Pascal System
        // unit; indexing through it must re-base like any other array.
        let max = self.arena.alloc(ConstExpr {
            value: ConstValue::Int(1000),
            is_hex: false,
            span: Span::default(),
        });
        let of = self.arena.alloc(TypeIdent::builtin(Builtin::Integer, Span::default()));
        let port = self.arena.alloc(ArraySpec {
            min: 0,
            max: Expr::Const(max),
            of: TypeSpec::Ident(of),
            span: Span::default(),
        });
        self.scopes.define_var("Port", TypeSpec::Array(port));

        // Video line type from the platform layer, a string of 80 cells.
        self.types
            .define("TVideoLine", TypeSpec::String(StringSpec { max_len: 80 }));
    }

    pub fn run(&mut self, file: File<'ast>) -> Result<()> {
        match file {
            File::Program(program) => self.program(program),
            File::Unit(unit) => self.unit(unit),
        }
    }

    fn program(&mut self, program: &'ast Program<'ast>) -> Result<()> {
        self.print("package main\n\n")?;
        if !program.uses.is_empty() {
            write!(self.out, "// uses: {}\n\n", program.uses.join(", "))?;
            for name in program.uses {
                self.bind_unit_interface(name);
            }
        }
        self.bind_decls(program.decls);
        self.decls(program.decls, true)?;
        self.print("func main() {\n")?;
        self.stmts(program.body.stmts)?;
        self.print("}\n")
    }

    fn unit(&mut self, unit: &'ast Unit<'ast>) -> Result<()> {
        write!(self.out, "package main // unit: {}\n\n", unit.name)?;
        if !unit.interface_uses.is_empty() {
            write!(self.out, "// interface uses: {}\n\n", unit.interface_uses.join(", "))?;
            for name in unit.interface_uses {
                self.bind_unit_interface(name);
            }
        }
        self.bind_decls(unit.interface);
        self.decls(unit.interface, true)?;
        if !unit.implementation_uses.is_empty() {
            write!(
                self.out,
                "\n// implementation uses: {}\n\n",
                unit.implementation_uses.join(", ")
            )?;
            for name in unit.implementation_uses {
                self.bind_unit_interface(name);
            }
        }
        self.bind_decls(unit.implementation);
        self.decls(unit.implementation, true)?;
        self.print("func init() {\n")?;
        self.stmts(unit.init.stmts)?;
        self.print("}\n")
    }

    pub(crate) fn print(&mut self, s: &str) -> Result<()> {
        self.out.write_str(s)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pasgo_ast::CompoundStmt;

    fn empty_body(arena: &Bump) -> &CompoundStmt<'_> {
        arena.alloc(CompoundStmt {
            stmts: &[],
            span: Span::default(),
        })
    }

    #[test]
    fn program_framing() {
        let arena = Bump::new();
        let program = arena.alloc(Program {
            name: "HELLO",
            uses: &[],
            decls: &[],
            body: empty_body(&arena),
            span: Span::default(),
        });

        let mut out = String::new();
        let mut translator = Translator::new(&arena, &[], &mut out);
        translator.run(File::Program(program)).unwrap();

        assert_eq!(out, "package main\n\nfunc main() {\n}\n");
    }

    #[test]
    fn program_uses_comment() {
        let arena = Bump::new();
        let program = arena.alloc(Program {
            name: "GAME",
            uses: arena.alloc_slice_copy(&["Crt", "Dos", "Video"]),
            decls: &[],
            body: empty_body(&arena),
            span: Span::default(),
        });

        let mut out = String::new();
        let mut translator = Translator::new(&arena, &[], &mut out);
        translator.run(File::Program(program)).unwrap();

        assert_eq!(
            out,
            "package main\n\n// uses: Crt, Dos, Video\n\nfunc main() {\n}\n"
        );
    }

    #[test]
    fn unit_framing() {
        let arena = Bump::new();
        let unit = arena.alloc(Unit {
            name: "Sounds",
            interface_uses: &[],
            interface: &[],
            implementation_uses: &[],
            implementation: &[],
            init: empty_body(&arena),
            span: Span::default(),
        });

        let mut out = String::new();
        let mut translator = Translator::new(&arena, &[], &mut out);
        translator.run(File::Unit(unit)).unwrap();

        assert_eq!(out, "package main // unit: Sounds\n\nfunc init() {\n}\n");
    }

    #[test]
    fn unit_uses_comments() {
        let arena = Bump::new();
        let unit = arena.alloc(Unit {
            name: "Game",
            interface_uses: arena.alloc_slice_copy(&["GameVars"]),
            interface: &[],
            implementation_uses: arena.alloc_slice_copy(&["Crt", "Video"]),
            implementation: &[],
            init: empty_body(&arena),
            span: Span::default(),
        });

        let mut out = String::new();
        let mut translator = Translator::new(&arena, &[], &mut out);
        translator.run(File::Unit(unit)).unwrap();

        assert_eq!(
            out,
            "package main // unit: Game\n\n// interface uses: GameVars\n\n\
             \n// implementation uses: Crt, Video\n\nfunc init() {\n}\n"
        );
    }

    #[test]
    fn predefined_names_are_bound() {
        let arena = Bump::new();
        let mut out = String::new();
        let translator = Translator::new(&arena, &[], &mut out);

        assert!(matches!(
            translator.scopes.lookup("port").map(|b| b.spec),
            Some(TypeSpec::Array(_))
        ));
        assert!(matches!(
            translator.types.lookup("tvideoline"),
            Some(TypeSpec::String(spec)) if spec.max_len == 80
        ));
    }
}
