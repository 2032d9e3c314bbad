//! 并查集
//!
//! 路径压缩，不做按秩合并：`union(a, b)` 总是让 `find(a)` 的根指向 `find(b)` 的根，
//! 这样 Kruskal 的输出对给定输入完全确定。

/// 不相交集合
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// 创建包含 `n` 个单元素集合的并查集
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// 让 `x` 成为单元素集合（必要时扩容，中间元素同样初始化为自身）
    pub fn make_set(&mut self, x: usize) {
        if x >= self.parent.len() {
            let start = self.parent.len();
            self.parent.extend(start..=x);
        } else {
            self.parent[x] = x;
        }
    }

    /// 查找根，并把整条路径直接挂到根上
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// 合并两个集合；已在同一集合时返回 false
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        self.parent[root_a] = root_b;
        true
    }

    /// 是否在同一集合
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// 集合个数
    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| i == p)
            .count()
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
