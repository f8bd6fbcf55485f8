pub mod rtree_point_set;
