use crate::parser::ast::Expr;

/// Renders an expression tree in reverse Polish notation: every operand is
/// followed by a space, and the operator comes last.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn print(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => literal.to_string(),
            Expr::Grouping(inner) => self.construct_rpn("Group", &[inner.as_ref()]),
            Expr::Unary(operator, right) => {
                self.construct_rpn(&operator.lexeme, &[right.as_ref()])
            }
            Expr::Binary(left, operator, right) => {
                self.construct_rpn(&operator.lexeme, &[left.as_ref(), right.as_ref()])
            }
            Expr::Ternary {
                condition,
                if_true,
                if_false,
            } => self.construct_rpn(
                "ternary",
                &[condition.as_ref(), if_true.as_ref(), if_false.as_ref()],
            ),
        }
    }

    fn construct_rpn(&self, operator: &str, exprs: &[&Expr]) -> String {
        let mut rpn = exprs.iter().fold(String::new(), |mut rpn, expr| {
            rpn.push_str(&self.print(expr));
            rpn.push(' ');
            rpn
        });
        rpn.push_str(operator);

        rpn
    }
}
