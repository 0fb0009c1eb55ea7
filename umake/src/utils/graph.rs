use std::cmp;
use std::fmt;


/// Directed graph with nodes kept in insertion order.
///
/// An edge `node -> child` means `node` depends on `child`.
#[derive(Clone, Default)]
pub struct Graph<N: Clone> {
    nodes: Vec<N>,
    graph: Vec<Vec<usize>>,
}

impl<N: Eq + Clone> Graph<N> {
    pub fn new() -> Self {
        Self { graph: Vec::new(), nodes: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn add(&mut self, node: N) {
        if self.find(&node).is_none() {
            self.push(node);
        }
    }

    /// Adds the edge `node -> child`, inserting either node if missing.
    /// Linking the same pair twice keeps a single edge.
    pub fn link(&mut self, node: N, child: N) {
        let n = self.find_or_insert(node);
        let c = self.find_or_insert(child);
        if !self.graph[n].contains(&c) {
            self.graph[n].push(c);
        }
    }

    pub fn contains(&self, node: &N) -> bool {
        self.find(node).is_some()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Children of `node` in the order they were linked.
    pub fn children(&self, node: &N) -> impl Iterator<Item = &N> {
        let edges = match self.find(node) {
            Some(n) => self.graph[n].as_slice(),
            None => &[],
        };
        edges.iter().map(move |c| &self.nodes[*c])
    }

    pub fn cycles(&self) -> GraphCycles {
        GraphCycles(detect_cycles(self))
    }

    /// Depth-first post-order starting at each of `roots` in turn.
    ///
    /// Children are visited in link order and every node appears once,
    /// after all of its children. Roots that are not in the graph are skipped.
    /// NOTE: Only meaningful for DAGs, check `cycles` first.
    pub fn post_order<'a>(&'a self, roots: impl IntoIterator<Item = &'a N>) -> Vec<&'a N> {
        let mut visited = BitVec::with_size(self.nodes.len());
        let mut order = Vec::with_capacity(self.nodes.len());
        for root in roots {
            if let Some(r) = self.find(root) {
                self.visit(r, &mut visited, &mut order);
            }
        }
        order.into_iter().map(|n| &self.nodes[n]).collect()
    }

    fn visit(&self, n: usize, visited: &mut BitVec, order: &mut Vec<usize>) {
        if visited.get(n) {
            return;
        }
        visited.set(n);
        for c in self.graph[n].iter() {
            self.visit(*c, visited, order);
        }
        order.push(n);
    }

    fn find(&self, node: &N) -> Option<usize> {
        self.nodes.iter().position(|v| v == node)
    }

    fn find_or_insert(&mut self, node: N) -> usize {
        self.find(&node)
            .unwrap_or_else(|| self.push(node))
    }

    fn push(&mut self, node: N) -> usize {
        self.nodes.push(node);
        self.graph.push(Vec::new());
        self.nodes.len() - 1
    }
}

impl<N: fmt::Display + Eq + Clone> fmt::Debug for Graph<N> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(fmt, "Graph {{")?;
        for (n, e) in self.graph.iter().enumerate() {
            writeln!(fmt, "  - {}", self.nodes[n])?;
            for n in e.iter() {
                writeln!(fmt, "    - {}", self.nodes[*n])?;
            }
        }
        write!(fmt, "}}")?;
        Ok(())
    }
}


/// Cycles found in a graph, as lists of node indices
pub struct GraphCycles(Vec<Vec<usize>>);

impl GraphCycles {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Returns nested iterator X of iterators (Y, Y1, Y2, ...)
    //  - Item of Y has lifetime of graph borrow ('b)
    //  - Y has lifetime of self borrow ('a)
    //  - graph borrow ('b) must be >= self borrow ('a)
    //      so that each item of Y lives at least as long as Y
    pub fn iter<'a, 'b, N: Clone>(
        &'a self,
        g: &'b Graph<N>
    ) -> impl Iterator<Item = impl Iterator<Item = &'b N> + 'a> where 'b: 'a,
    {
        self.0
            .iter()
            .map(|v| {
                v.iter()
                    .map(|i| &g.nodes[*i])
            })
    }
}


/// Tarjan's strongly connected components algorithm
/// Used to collect all cycles in a graph in linear time
///  --> https://en.wikipedia.org/wiki/Tarjan%27s_strongly_connected_components_algorithm
///
#[derive(Default)]
struct State {
    current: usize,
    stack: Vec<usize>,
    index: Vec<usize>,
    lowlink: Vec<usize>,
    on_stack: BitVec,
    cycles: Vec<Vec<usize>>,
}

fn detect_cycles<N: Clone>(g: &Graph<N>) -> Vec<Vec<usize>> {
    let mut s = State::default();
    s.index.resize(g.nodes.len(), usize::MAX);
    s.lowlink.resize(g.nodes.len(), 0);
    s.on_stack.resize(g.nodes.len());
    for v in 0..g.nodes.len() {
        if s.index[v] == usize::MAX {
            strong_connect(g, &mut s, v);
        }
    }
    s.cycles
}

fn strong_connect<N: Clone>(g: &Graph<N>, s: &mut State, v: usize) {
    // Set the depth index for v to the smallest unused index
    s.index[v] = s.current;
    s.lowlink[v] = s.current;
    s.on_stack.set(v);
    s.current += 1;
    s.stack.push(v);

    for w in g.graph[v].iter() {
        let w = *w;
        if s.index[w] == usize::MAX {
            // Successor w has not yet been visited; recurse on it
            strong_connect(g, s, w);
            s.lowlink[v] = cmp::min(s.lowlink[v], s.lowlink[w]);
        } else if s.on_stack.get(w) {
            // Successor w is in stack S and hence in the current SCC
            // Note: s.index[w], not s.lowlink[w], as in the original paper
            s.lowlink[v] = cmp::min(s.lowlink[v], s.index[w])
        }
    }

    // If v is a root node, pop the stack and generate an SCC
    if s.lowlink[v] == s.index[v] {
        let mut cycle = Vec::new();
        while let Some(w) = s.stack.pop() {
            s.on_stack.clear(w);
            cycle.push(w);
            if w == v {
                break;
            }
        }
        // A single node is a cycle only if it links to itself
        if cycle.len() > 1 || g.graph[v].contains(&v) {
            cycle.reverse();
            s.cycles.push(cycle);
        }
    }
}


#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVec {
    words: Vec<u64>,
}

impl BitVec {
    pub fn new() -> Self {
        Self{words: Vec::new()}
    }

    pub fn with_size(n_bits: usize) -> Self {
        let mut s = Self::new();
        s.resize(n_bits);
        s
    }

    pub fn resize(&mut self, n_bits: usize) {
        let n = (n_bits + N_BITS_PER_WORD - 1) / N_BITS_PER_WORD;
        self.words.resize(n, 0);
    }

    #[inline]
    pub fn get(&self, i: usize) -> bool {
        (self.words[i / N_BITS_PER_WORD] & mask(i)) != 0
    }

    #[inline]
    pub fn set(&mut self, i: usize) {
        self.words[i / N_BITS_PER_WORD] |= mask(i);
    }

    #[inline]
    pub fn clear(&mut self, i: usize) {
        self.words[i / N_BITS_PER_WORD] &= !mask(i);
    }
}

impl std::fmt::Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for w in self.words.iter() {
            for i in 0..N_BITS_PER_WORD {
                if (w & (1 << i)) != 0 {
                    1
                } else {
                    0
                }.fmt(f)?
            }
        }
        Ok(())
    }
}

type Word = u64;
const N_BITS_PER_WORD: usize = std::mem::size_of::<Word>() * 8;

#[inline]
const fn mask(i: usize) -> u64 {
    1 << (i & (N_BITS_PER_WORD - 1))
}
