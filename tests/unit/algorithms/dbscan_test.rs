use super::*;

type Point = (i64, i64);

fn create_index(points: &[Point], eps: i64) -> HashMap<&Point, Vec<&Point>> {
    points
        .iter()
        .map(|point| {
            let mut neighbors = points
                .iter()
                .map(|other| (other, (point.0 - other.0).abs() + (point.1 - other.1).abs()))
                .filter(|(_, distance)| *distance <= eps)
                .collect::<Vec<_>>();
            neighbors.sort_by(|(a, dist_a), (b, dist_b)| dist_a.cmp(dist_b).then_with(|| a.cmp(b)));

            (point, neighbors.into_iter().map(|(other, _)| other).collect::<Vec<_>>())
        })
        .collect()
}

fn sorted(cluster: Cluster<'_, Point>) -> Vec<Point> {
    let mut points = cluster.into_iter().copied().collect::<Vec<_>>();
    points.sort_unstable();

    points
}

#[test]
fn can_create_dense_clusters_and_keep_noise() {
    let points = vec![(0, 0), (1, 0), (0, 1), (10, 10), (11, 10), (10, 11), (100, 100)];
    let index = create_index(&points, 2);

    let clustering = create_clusters(&points, 2, |point| {
        index.get(point).map(|all| all.iter().copied()).into_iter().flatten()
    });

    assert_eq!(clustering.clusters.len(), 2);
    assert_eq!(sorted(clustering.clusters[0].clone()), vec![(0, 0), (0, 1), (1, 0)]);
    assert_eq!(sorted(clustering.clusters[1].clone()), vec![(10, 10), (10, 11), (11, 10)]);
    assert_eq!(clustering.noise, vec![&(100, 100)]);
}

#[test]
fn can_keep_every_point_with_min_points_one() {
    let points = vec![(0, 0), (1, 0), (0, 1), (10, 10), (11, 10), (10, 11), (100, 100)];
    let index = create_index(&points, 2);

    let clustering = create_clusters(&points, 1, |point| {
        index.get(point).map(|all| all.iter().copied()).into_iter().flatten()
    });

    assert_eq!(clustering.clusters.len(), 3);
    assert!(clustering.noise.is_empty());

    let total: usize = clustering.clusters.iter().map(|cluster| cluster.len()).sum();
    assert_eq!(total, points.len());
}

#[test]
fn can_absorb_border_points_into_cluster() {
    // the middle point is the only core point, ends of the chain are borders
    let points = vec![(0, 0), (2, 0), (4, 0)];
    let index = create_index(&points, 2);

    let clustering = create_clusters(&points, 3, |point| {
        index.get(point).map(|all| all.iter().copied()).into_iter().flatten()
    });

    assert_eq!(clustering.clusters.len(), 1);
    assert_eq!(sorted(clustering.clusters[0].clone()), vec![(0, 0), (2, 0), (4, 0)]);
    assert!(clustering.noise.is_empty());
}

#[test]
fn can_handle_empty_input() {
    let points: Vec<Point> = vec![];
    let index = create_index(&points, 2);

    let clustering = create_clusters(&points, 2, |point| {
        index.get(point).map(|all| all.iter().copied()).into_iter().flatten()
    });

    assert!(clustering.clusters.is_empty());
    assert!(clustering.noise.is_empty());
}
