//! 单元格格式
//!
//! 展示层依赖这些记号逐字节匹配，不要改动

use crate::types::Distance;

/// Bellman-Ford 表中的无穷距离
pub const INFINITY: &str = "∞";
/// Bellman-Ford 表中的“无前驱”
pub const NO_PREDECESSOR: &str = "*";
/// Dijkstra 表中已确定的顶点 / 空单元格
pub const SETTLED: &str = "-";
/// Dijkstra 表中尚未到达的顶点
pub const UNREACHED: &str = "inf";

/// Bellman-Ford 顶点状态 `"(d, p)"`
pub fn bf_state(dist: Distance, pred: Option<&str>) -> String {
    format!("({}, {})", distance(dist), pred.unwrap_or(NO_PREDECESSOR))
}

/// Dijkstra 顶点状态 `"(p, d)"`，距离无穷时为 `inf`
pub fn dijkstra_state(pred: &str, dist: Distance) -> String {
    match dist {
        Distance::Finite(d) => format!("({}, {})", pred, d),
        Distance::Infinite => UNREACHED.to_string(),
    }
}

/// 选中顶点 `"name, d"`
pub fn choice(name: &str, dist: Distance) -> String {
    format!("{}, {}", name, distance(dist))
}

/// 距离单元格
pub fn distance(dist: Distance) -> String {
    dist.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!(bf_state(Distance::Infinite, None), "(∞, *)");
        assert_eq!(bf_state(Distance::Finite(-2), Some("B")), "(-2, B)");
        assert_eq!(dijkstra_state("A", Distance::Finite(3)), "(A, 3)");
        assert_eq!(dijkstra_state("A", Distance::Infinite), "inf");
        assert_eq!(choice("C", Distance::Finite(0)), "C, 0");
        assert_eq!(distance(Distance::Infinite), INFINITY);
    }
}
