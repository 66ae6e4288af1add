pub mod opencv_rectangle_annotator;
