/// Represents a binary operator.
///
/// Each operator knows its binding strength and grouping direction, which the
/// parser encodes in its grammar tiers and the tree printer uses to decide
/// where parentheses are needed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating integer division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Grouping direction among operators of equal precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

impl BinaryOperator {
    /// Binding strength; a higher number binds tighter.
    ///
    /// ```
    /// use expression_solver::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mul.precedence());
    /// assert_eq!(BinaryOperator::Mul.precedence(), BinaryOperator::Div.precedence());
    /// assert!(BinaryOperator::Div.precedence() > BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Grouping direction for chains of this operator.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// The character used for this operator in source text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// The name of the operation, as used in log messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
            Self::Pow => "exponentiation",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Handle to a [`Node`] stored in an [`Arena`].
pub type Id = id_arena::Id<Node>;
/// Storage for the nodes of one expression.
pub type Arena = id_arena::Arena<Node>;

/// A single node of an expression tree.
///
/// Leaves are literals; every internal node is a binary operation referring
/// to exactly two children by [`Id`]. Positions are byte offsets into the
/// whitespace-stripped source and point at the literal or the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A non-negative integer literal.
    Literal {
        /// The constant value.
        value:    i64,
        /// Offset of the first digit.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Id,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Id,
        /// Offset of the operator token.
        position: usize,
    },
}

/// A parsed expression: its nodes and the root among them.
///
/// Nodes are allocated children first, so iterating the arena visits the
/// tree in post-order (left subtree, right subtree, parent) and the root
/// comes last. Nothing that walks an `Expr` recurses, so a flat chain such
/// as `1+1+...+1` costs no stack no matter how long it is.
pub struct Expr {
    arena: Arena,
    root:  Id,
}

impl Expr {
    /// Wraps an arena built by the parser. `root` must be the last node
    /// allocated and every node must be reachable from it.
    pub(crate) const fn new(arena: Arena, root: Id) -> Self {
        Self { arena, root }
    }

    /// The node representing the whole expression.
    #[must_use]
    pub const fn root(&self) -> Id {
        self.root
    }

    /// Looks up a node of this expression.
    #[must_use]
    pub fn node(&self, id: Id) -> &Node {
        &self.arena[id]
    }

    /// Iterates over every node in post-order, the root last.
    pub fn nodes(&self) -> impl Iterator<Item = (Id, &Node)> + '_ {
        self.arena.iter()
    }

    /// Number of nodes, literals included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always `false`: an expression holds at least one literal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Number of binary operations in the tree.
    ///
    /// ```
    /// use expression_solver::parse_expression_str;
    ///
    /// assert_eq!(parse_expression_str("(1+2)*3").unwrap().operation_count(), 2);
    /// assert_eq!(parse_expression_str("42").unwrap().operation_count(), 0);
    /// ```
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.arena
            .iter()
            .filter(|(_, node)| matches!(node, Node::BinaryOp { .. }))
            .count()
    }

    /// Whether `child`, sitting on the given side of `parent`, must be wrapped
    /// in parentheses to keep its grouping when printed.
    fn needs_parens(&self, child: Id, parent: BinaryOperator, is_right: bool) -> bool {
        let Node::BinaryOp { op, .. } = self.arena[child] else {
            return false;
        };
        if op.precedence() != parent.precedence() {
            return op.precedence() < parent.precedence();
        }
        match parent.associativity() {
            Associativity::Left => is_right,
            Associativity::Right => !is_right,
        }
    }
}

impl std::fmt::Debug for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Expr")
         .field("nodes", &self.arena.iter().map(|(_, node)| node).collect::<Vec<_>>())
         .field("root", &self.root.index())
         .finish()
    }
}

/// Pending work for the printer.
enum Print {
    Node { id: Id, parens: bool },
    Text(char),
}

/// Prints the tree back as source text with the fewest parentheses that
/// preserve its structure.
///
/// ```
/// use expression_solver::parse_expression_str;
///
/// let expr = parse_expression_str("((1+2))*3-(4-5)").unwrap();
/// assert_eq!(expr.to_string(), "(1+2)*3-(4-5)");
///
/// let expr = parse_expression_str("(2^3)^2").unwrap();
/// assert_eq!(expr.to_string(), "(2^3)^2");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut stack = vec![Print::Node { id:     self.root,
                                           parens: false, }];

        while let Some(item) = stack.pop() {
            match item {
                Print::Text(c) => write!(f, "{c}")?,
                Print::Node { id, parens } => match self.arena[id] {
                    Node::Literal { value, .. } => write!(f, "{value}")?,
                    Node::BinaryOp { left, op, right, .. } => {
                        // Pushed in reverse: the left side is printed first.
                        if parens {
                            stack.push(Print::Text(')'));
                        }
                        stack.push(Print::Node { id:     right,
                                                 parens: self.needs_parens(right, op, true), });
                        stack.push(Print::Text(op.symbol()));
                        stack.push(Print::Node { id:     left,
                                                 parens: self.needs_parens(left, op, false), });
                        if parens {
                            stack.push(Print::Text('('));
                        }
                    },
                },
            }
        }

        Ok(())
    }
}
